use crate::core::matcher::Trigger;
use crate::core::rules::{Rule, Template, strings};
use crate::models::health::{ActivityLevel, BmiCategory};
use crate::models::recommendation::ExerciseRecommendation;
use crate::models::symptom::SymptomKind as S;

pub struct ExerciseTemplate {
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub exercises: &'static [&'static str],
    pub duration: &'static str,
    pub frequency: &'static str,
    pub intensity: &'static str,
    pub reason: &'static str,
}

impl Template for ExerciseTemplate {
    type Entry = ExerciseRecommendation;

    fn identity_key(&self) -> &'static str {
        self.category
    }

    fn build(&self) -> ExerciseRecommendation {
        ExerciseRecommendation {
            category: self.category.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            exercises: strings(self.exercises),
            duration: self.duration.to_string(),
            frequency: self.frequency.to_string(),
            intensity: self.intensity.to_string(),
            reason: self.reason.to_string(),
        }
    }
}

/// At most one fires; an unspecified level contributes nothing.
pub static ACTIVITY_RULES: &[Rule<ExerciseTemplate>] = &[
    Rule {
        trigger: Trigger::ActivityLevelIs(ActivityLevel::Sedentary),
        template: ExerciseTemplate {
            category: "beginner",
            title: "Mulai dengan Aktivitas Ringan",
            description: "Bangun kebiasaan olahraga secara bertahap",
            exercises: &["Jalan kaki 15-30 menit", "Stretching pagi", "Yoga pemula", "Berenang santai"],
            duration: "15-30 menit",
            frequency: "3-4 kali/minggu",
            intensity: "Ringan",
            reason: "Tingkat aktivitas Anda rendah, mulai perlahan",
        },
    },
    Rule {
        trigger: Trigger::ActivityLevelIs(ActivityLevel::Light),
        template: ExerciseTemplate {
            category: "intermediate_light",
            title: "Tingkatkan Intensitas Olahraga",
            description: "Tambah variasi dan durasi latihan",
            exercises: &["Jogging ringan", "Bersepeda santai", "Senam aerobik", "Pilates"],
            duration: "30-45 menit",
            frequency: "4-5 kali/minggu",
            intensity: "Ringan-Sedang",
            reason: "Anda sudah aktif ringan, tingkatkan intensitas",
        },
    },
    Rule {
        trigger: Trigger::ActivityLevelIs(ActivityLevel::Moderate),
        template: ExerciseTemplate {
            category: "intermediate",
            title: "Variasikan Latihan Anda",
            description: "Kombinasi kardio dan latihan kekuatan",
            exercises: &["Lari 5K", "HIIT workout", "Angkat beban", "Berenang lap", "Bulu tangkis"],
            duration: "45-60 menit",
            frequency: "5 kali/minggu",
            intensity: "Sedang",
            reason: "Tingkat aktivitas sedang, tambah variasi",
        },
    },
    Rule {
        trigger: Trigger::ActivityLevelIs(ActivityLevel::Active),
        template: ExerciseTemplate {
            category: "advanced",
            title: "Pertahankan Performa",
            description: "Jaga konsistensi dan hindari overtraining",
            exercises: &["Lari jarak jauh", "CrossFit", "Latihan interval", "Olahraga kompetitif"],
            duration: "60+ menit",
            frequency: "5-6 kali/minggu dengan 1 hari istirahat",
            intensity: "Tinggi",
            reason: "Anda sangat aktif, jaga keseimbangan",
        },
    },
];

pub static BMI_RULES: &[Rule<ExerciseTemplate>] = &[Rule {
    trigger: Trigger::BmiCategoryIn(&[BmiCategory::Overweight, BmiCategory::Obese]),
    template: ExerciseTemplate {
        category: "weight_loss",
        title: "Olahraga untuk Menurunkan Berat",
        description: "Kombinasi kardio untuk membakar kalori",
        exercises: &["Jalan cepat", "Berenang", "Sepeda statis", "Eliptical trainer", "Zumba"],
        duration: "45-60 menit",
        frequency: "5-6 kali/minggu",
        intensity: "Sedang",
        reason: "Fokus pada pembakaran kalori untuk penurunan berat badan",
    },
}];

pub static SYMPTOM_RULES: &[Rule<ExerciseTemplate>] = &[
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::JointPain, S::MusclePain]),
        template: ExerciseTemplate {
            category: "low_impact",
            title: "🦴 Olahraga Rendah Dampak",
            description: "Aktivitas yang tidak membebani sendi dan otot",
            exercises: &["Berenang", "Yoga", "Tai Chi", "Bersepeda statis", "Water aerobics"],
            duration: "20-30 menit",
            frequency: "3-4 kali/minggu",
            intensity: "Ringan",
            reason: "Anda mengalami nyeri sendi/otot, pilih olahraga yang lembut",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::Fever, S::Flu, S::Cold]),
        template: ExerciseTemplate {
            category: "recovery",
            title: "🤒 Istirahat saat Demam/Flu",
            description: "Fokus pada pemulihan saat sakit",
            exercises: &["Istirahat total", "Stretching ringan di tempat tidur", "Pernapasan dalam", "Jalan pelan di dalam rumah"],
            duration: "5-10 menit",
            frequency: "Sesuai kemampuan",
            intensity: "Sangat Ringan",
            reason: "Saat demam/flu, prioritaskan istirahat. Olahraga berat dapat memperburuk kondisi. Mulai kembali olahraga secara bertahap setelah pulih.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::HighBloodPressure, S::Hypertension]),
        template: ExerciseTemplate {
            category: "blood_pressure",
            title: "❤️ Olahraga untuk Tekanan Darah",
            description: "Aktivitas yang membantu mengontrol tekanan darah",
            exercises: &["Jalan kaki santai", "Berenang", "Bersepeda santai", "Yoga", "Tai Chi", "Senam ringan"],
            duration: "30-40 menit",
            frequency: "5 kali/minggu",
            intensity: "Ringan-Sedang",
            reason: "Olahraga teratur membantu menurunkan tekanan darah. Hindari angkat beban berat dan olahraga intensitas tinggi.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::Stress, S::Anxious, S::Anxiety]),
        template: ExerciseTemplate {
            category: "stress_relief",
            title: "🧘 Olahraga Pereda Stres",
            description: "Aktivitas fisik untuk mengurangi stres dan kecemasan",
            exercises: &["Yoga", "Tai Chi", "Jalan santai di alam", "Berenang", "Stretching/peregangan", "Pilates"],
            duration: "30-45 menit",
            frequency: "4-5 kali/minggu",
            intensity: "Ringan-Sedang",
            reason: "Olahraga melepaskan endorfin yang membantu mengurangi stres dan kecemasan. Fokus pada pernapasan dan gerakan mindful.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::SleepDisturbance, S::Insomnia, S::TroubleSleeping]),
        template: ExerciseTemplate {
            category: "sleep_improvement",
            title: "😴 Olahraga untuk Kualitas Tidur",
            description: "Aktivitas yang membantu meningkatkan kualitas tidur",
            exercises: &["Yoga sebelum tidur", "Stretching malam", "Jalan kaki sore", "Tai Chi", "Pernapasan 4-7-8"],
            duration: "20-30 menit",
            frequency: "Setiap hari (hindari 3 jam sebelum tidur)",
            intensity: "Ringan",
            reason: "Olahraga teratur meningkatkan kualitas tidur, tetapi hindari olahraga intensif 3 jam sebelum tidur.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::PhysicalFatigue, S::Burnout, S::Weakness, S::EmotionalExhaustion]),
        template: ExerciseTemplate {
            category: "energy_boost",
            title: "⚡ Olahraga untuk Memulihkan Energi",
            description: "Aktivitas ringan untuk mengembalikan energi tanpa menambah kelelahan",
            exercises: &["Jalan santai di luar ruangan", "Yoga restoratif", "Stretching pagi", "Berenang santai", "Berkebun"],
            duration: "15-30 menit",
            frequency: "3-4 kali/minggu, sesuai kemampuan",
            intensity: "Ringan",
            reason: "Saat burnout, olahraga ringan di luar ruangan dapat membantu memulihkan energi. Jangan memaksakan diri, dengarkan tubuh Anda.",
        },
    },
];
