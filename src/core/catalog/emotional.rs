use crate::core::matcher::Trigger;
use crate::core::rules::{Rule, Template, strings};
use crate::models::health::EmotionalState;
use crate::models::recommendation::EmotionalRecommendation;
use crate::models::symptom::SymptomKind as S;

pub struct EmotionalTemplate {
    /// Doubles as the identity key.
    pub tag: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub activities: &'static [&'static str],
    pub tips: &'static [&'static str],
    pub reason: &'static str,
}

impl Template for EmotionalTemplate {
    type Entry = EmotionalRecommendation;

    fn identity_key(&self) -> &'static str {
        self.tag
    }

    fn build(&self) -> EmotionalRecommendation {
        EmotionalRecommendation {
            emotional_state: self.tag.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            activities: strings(self.activities),
            tips: strings(self.tips),
            reason: self.reason.to_string(),
        }
    }
}

pub static STATE_RULES: &[Rule<EmotionalTemplate>] = &[
    Rule {
        trigger: Trigger::EmotionalStateIs(EmotionalState::Stressed),
        template: EmotionalTemplate {
            tag: "stressed",
            title: "Kelola Stres Anda",
            description: "Teknik relaksasi untuk mengurangi stres",
            activities: &["Meditasi 10 menit", "Pernapasan dalam (4-7-8)", "Jalan santai di alam", "Mendengarkan musik menenangkan", "Journaling"],
            tips: &["Tidur cukup 7-8 jam", "Batasi screen time", "Luangkan waktu untuk diri sendiri", "Bicara dengan orang terdekat"],
            reason: "Anda sedang mengalami stres",
        },
    },
    Rule {
        trigger: Trigger::EmotionalStateIs(EmotionalState::Anxious),
        template: EmotionalTemplate {
            tag: "anxious",
            title: "Atasi Kecemasan",
            description: "Aktivitas untuk menenangkan pikiran cemas",
            activities: &["Grounding technique (5-4-3-2-1)", "Progressive muscle relaxation", "Yoga restoratif", "Mewarnai mandala", "Merajut/craft"],
            tips: &["Hindari kafein berlebihan", "Batasi berita negatif", "Tetap terhubung dengan orang tersayang", "Fokus pada yang bisa dikontrol"],
            reason: "Anda sedang merasa cemas",
        },
    },
    Rule {
        trigger: Trigger::EmotionalStateIs(EmotionalState::Sad),
        template: EmotionalTemplate {
            tag: "sad",
            title: "Tingkatkan Mood Anda",
            description: "Aktivitas untuk mengangkat suasana hati",
            activities: &["Olahraga ringan (endorfin)", "Bertemu teman", "Menonton film favorit", "Memasak makanan kesukaan", "Berkebun"],
            tips: &["Jangan isolasi diri", "Tetap jaga rutinitas", "Terpapar sinar matahari pagi", "Jika berlanjut, pertimbangkan konseling"],
            reason: "Anda sedang merasa sedih",
        },
    },
    Rule {
        trigger: Trigger::EmotionalStateIs(EmotionalState::Happy),
        template: EmotionalTemplate {
            tag: "happy",
            title: "Pertahankan Kebahagiaan",
            description: "Aktivitas untuk menjaga mood positif",
            activities: &["Berbagi kebahagiaan", "Gratitude journal", "Lakukan hobi", "Quality time dengan keluarga", "Olahraga yang menyenangkan"],
            tips: &["Rayakan pencapaian kecil", "Bantu orang lain", "Simpan momen bahagia", "Tetap bersyukur"],
            reason: "Mood Anda sedang baik, pertahankan!",
        },
    },
    Rule {
        trigger: Trigger::EmotionalStateIs(EmotionalState::Neutral),
        template: EmotionalTemplate {
            tag: "neutral",
            title: "Jaga Keseimbangan Emosi",
            description: "Aktivitas untuk kesejahteraan mental",
            activities: &["Mindfulness harian", "Olahraga rutin", "Hobi kreatif", "Sosialisasi sehat", "Belajar hal baru"],
            tips: &["Tetap jaga rutinitas sehat", "Check-in perasaan secara rutin", "Istirahat yang cukup"],
            reason: "Jaga keseimbangan emosional Anda",
        },
    },
];

/// Each mental symptom maps to its own entry, independent of the state rules.
pub static SYMPTOM_RULES: &[Rule<EmotionalTemplate>] = &[
    Rule {
        trigger: Trigger::SymptomPresent(S::SleepDisturbance),
        template: EmotionalTemplate {
            tag: "sleep_issue",
            title: "😴 Perbaiki Kualitas Tidur",
            description: "Tips dan aktivitas untuk tidur lebih berkualitas",
            activities: &["Rutinitas tidur tetap (jam sama setiap hari)", "Hindari gadget 1 jam sebelum tidur", "Mandi air hangat", "Aromatherapy lavender", "Membaca buku fisik", "Teknik relaksasi otot progresif"],
            tips: &["Jaga suhu kamar sejuk (18-22°C)", "Hindari kafein setelah jam 2 siang", "Olahraga pagi, hindari malam", "Konsisten jam tidur & bangun", "Gunakan masker mata jika perlu"],
            reason: "Anda mengalami gangguan tidur. Hindari kafein malam hari dan lakukan relaksasi ringan sebelum tidur.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresent(S::Insomnia),
        template: EmotionalTemplate {
            tag: "insomnia",
            title: "🌙 Atasi Insomnia",
            description: "Langkah-langkah untuk mengatasi kesulitan tidur",
            activities: &["Teknik pernapasan 4-7-8", "Body scan meditation", "White noise atau musik alam", "Journaling sebelum tidur", "Stretching ringan"],
            tips: &["Gunakan tempat tidur hanya untuk tidur", "Jangan lihat jam saat sulit tidur", "Bangun jika tidak bisa tidur 20 menit", "Hindari tidur siang terlalu lama"],
            reason: "Anda mengalami insomnia. Ciptakan rutinitas tidur yang konsisten dan lingkungan tidur yang nyaman.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresent(S::Stress),
        template: EmotionalTemplate {
            tag: "stress",
            title: "🧘 Kelola Stres dengan Efektif",
            description: "Teknik dan aktivitas untuk mengurangi stres",
            activities: &["Meditasi mindfulness 10 menit", "Teknik pernapasan dalam (4-7-8)", "Jalan santai di alam/taman", "Mendengarkan musik tenang", "Menulis jurnal perasaan", "Progressive muscle relaxation"],
            tips: &["Tidur cukup 7-8 jam", "Batasi screen time", "Luangkan waktu untuk diri sendiri", "Bicara dengan orang terdekat", "Batasi konsumsi berita negatif"],
            reason: "Anda mengalami stres. Disarankan meditasi 10 menit setiap hari dan menulis jurnal untuk mengekspresikan perasaan.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresent(S::Anxious),
        template: EmotionalTemplate {
            tag: "anxiety",
            title: "💆 Atasi Kecemasan",
            description: "Aktivitas untuk menenangkan pikiran yang cemas",
            activities: &["Grounding technique (5-4-3-2-1)", "Box breathing (4-4-4-4)", "Yoga restoratif", "Mewarnai mandala", "Merajut/craft", "Berjalan tanpa alas kaki di rumput"],
            tips: &["Hindari kafein berlebihan", "Batasi berita negatif", "Fokus pada hal yang bisa dikontrol", "Tetap terhubung dengan orang tersayang", "Rutin berolahraga ringan"],
            reason: "Anda merasa cemas. Latihan pernapasan dan grounding technique dapat membantu menenangkan pikiran.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresent(S::Burnout),
        template: EmotionalTemplate {
            tag: "burnout",
            title: "⚡ Pulihkan Diri dari Burnout",
            description: "Langkah pemulihan dari kelelahan emosional dan fisik",
            activities: &["Ambil cuti/istirahat", "Aktivitas luar ruangan (hiking, piknik)", "Digital detox", "Reconnect dengan hobi lama", "Quality time bersama keluarga", "Spa/self-care day"],
            tips: &["Set boundaries dengan jelas", "Belajar bilang 'tidak'", "Prioritaskan kesehatan", "Luangkan waktu berkualitas dengan keluarga", "Pertimbangkan konseling profesional"],
            reason: "Anda mengalami burnout. Istirahat, aktivitas luar ruangan, dan waktu bersama keluarga dapat membantu pemulihan.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresent(S::EmotionalExhaustion),
        template: EmotionalTemplate {
            tag: "emotional_exhaustion",
            title: "🌿 Pulihkan Energi Emosional",
            description: "Tips untuk memulihkan dari kelelahan emosional",
            activities: &["Aktivitas di alam terbuka", "Meditasi berjalan", "Hobi kreatif tanpa tekanan", "Waktu tenang sendirian", "Berkebun", "Bermain dengan hewan peliharaan"],
            tips: &["Kurangi tanggung jawab sementara", "Jangan merasa bersalah untuk istirahat", "Minta bantuan orang terdekat", "Hindari overthinking", "Fokus pada momen sekarang"],
            reason: "Anda mengalami kelelahan emosional. Penting untuk meluangkan waktu bersama keluarga dan melakukan aktivitas yang menyegarkan.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresent(S::SocialLoneliness),
        template: EmotionalTemplate {
            tag: "lonely",
            title: "👨‍👩‍👧‍👦 Bangun Koneksi Sosial",
            description: "Aktivitas untuk mengurangi kesepian dan membangun hubungan",
            activities: &["Hubungi teman lama", "Ikut komunitas hobi", "Volunteer/sukarelawan", "Adopsi hewan peliharaan", "Ikut kelas/workshop", "Video call dengan keluarga jauh"],
            tips: &["Kualitas > kuantitas hubungan", "Jangan takut memulai percakapan", "Online community juga valid", "Jadi pendengar yang baik", "Rutin berkumpul dengan keluarga"],
            reason: "Anda merasa kesepian. Membangun koneksi dengan keluarga dan komunitas dapat membantu kesejahteraan mental.",
        },
    },
];
