use crate::core::matcher::Trigger;
use crate::core::rules::{Rule, Template, strings};
use crate::models::health::BmiCategory;
use crate::models::recommendation::FoodRecommendation;
use crate::models::symptom::SymptomKind as S;

pub struct FoodTemplate {
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub foods: &'static [&'static str],
    pub avoid: &'static [&'static str],
    pub reason: &'static str,
}

impl Template for FoodTemplate {
    type Entry = FoodRecommendation;

    fn identity_key(&self) -> &'static str {
        self.category
    }

    fn build(&self) -> FoodRecommendation {
        FoodRecommendation {
            category: self.category.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            foods: strings(self.foods),
            avoid: strings(self.avoid),
            reason: self.reason.to_string(),
        }
    }
}

/// Exactly one of these fires for any BMI value.
pub static BMI_RULES: &[Rule<FoodTemplate>] = &[
    Rule {
        trigger: Trigger::BmiCategoryIn(&[BmiCategory::Underweight]),
        template: FoodTemplate {
            category: "weight_gain",
            title: "Makanan untuk Menambah Berat Badan",
            description: "Tingkatkan asupan kalori dengan makanan bergizi tinggi",
            foods: &["Alpukat", "Kacang-kacangan", "Susu full cream", "Nasi merah", "Daging tanpa lemak", "Telur", "Keju", "Yogurt"],
            avoid: &["Makanan cepat saji", "Minuman bersoda"],
            reason: "BMI Anda di bawah normal, perlu menambah asupan kalori sehat",
        },
    },
    Rule {
        trigger: Trigger::BmiCategoryIn(&[BmiCategory::Overweight, BmiCategory::Obese]),
        template: FoodTemplate {
            category: "weight_loss",
            title: "Makanan untuk Menurunkan Berat Badan",
            description: "Fokus pada makanan rendah kalori dan tinggi serat",
            foods: &["Sayuran hijau", "Buah-buahan segar", "Ikan", "Dada ayam", "Oatmeal", "Quinoa", "Kacang almond"],
            avoid: &["Gorengan", "Makanan tinggi gula", "Minuman manis", "Fast food", "Makanan olahan"],
            reason: "BMI Anda di atas normal, perlu mengurangi asupan kalori",
        },
    },
    Rule {
        trigger: Trigger::BmiCategoryIn(&[BmiCategory::Normal]),
        template: FoodTemplate {
            category: "maintenance",
            title: "Pertahankan Pola Makan Sehat",
            description: "Lanjutkan konsumsi makanan seimbang untuk gaya hidup sehat",
            foods: &["Sayuran beragam warna", "Protein seimbang", "Karbohidrat kompleks", "Buah segar", "Air putih cukup"],
            avoid: &["Makanan ultra-proses", "Gula berlebihan"],
            reason: "BMI Anda normal, pertahankan pola makan sehat",
        },
    },
];

pub static SYMPTOM_RULES: &[Rule<FoodTemplate>] = &[
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::Fever, S::Flu, S::Cold, S::Cough]),
        template: FoodTemplate {
            category: "fever_flu",
            title: "🤒 Makanan untuk Demam & Flu",
            description: "Makanan yang membantu pemulihan dari demam dan flu",
            foods: &["Sup ayam hangat", "Air putih hangat", "Teh jahe madu", "Buah jeruk (Vitamin C)", "Pisang", "Bubur ayam", "Kaldu tulang", "Lemon hangat"],
            avoid: &["Makanan berminyak", "Gorengan", "Es/minuman dingin", "Makanan pedas", "Susu (dapat memperbanyak lendir)"],
            reason: "Anda mengalami demam/flu. Perbanyak cairan hangat, istirahat cukup, dan konsumsi makanan berkuah. Obat pereda panas ringan seperti parasetamol dapat membantu.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::HighBloodPressure, S::Hypertension, S::Dizziness]),
        template: FoodTemplate {
            category: "blood_pressure",
            title: "❤️ Makanan untuk Hipertensi (Ref: Alodokter)",
            description: "Diet DASH - Batasi garam, perbanyak kalium dan magnesium. Masak dengan cara dikukus atau direbus.",
            foods: &["Pisang (tinggi kalium)", "Sayuran hijau (bayam, brokoli, kangkung)", "Ikan omega-3 (salmon, tuna, sarden)", "Buah-buahan segar (jeruk, semangka, melon, pepaya)", "Yogurt rendah lemak", "Kacang-kacangan", "Oatmeal & biji-bijian utuh", "Daging tanpa lemak (direbus/dikukus)", "Bawang putih"],
            avoid: &["Garam berlebihan (maks 1 sdt/hari)", "Makanan kaleng & acar", "Daging olahan (sosis, kornet)", "Makanan cepat saji", "Keripik asin", "Mie instan", "Saus & kecap kemasan", "Alkohol", "Makanan tinggi lemak jenuh"],
            reason: "Sumber: Alodokter. Batasi garam maksimal 1 sendok teh/hari. Perbanyak buah pisang dan sayuran hijau untuk kalium. Olahraga teratur 30-45 menit, 3-5 kali/minggu. Jaga berat badan ideal dan berhenti merokok.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::Stress, S::Anxious, S::Anxiety, S::Restlessness]),
        template: FoodTemplate {
            category: "stress_anxiety",
            title: "🧘 Makanan Pereda Stres & Kecemasan",
            description: "Makanan yang membantu menenangkan pikiran dan mengurangi stres",
            foods: &["Cokelat hitam (70%+ kakao)", "Alpukat", "Teh chamomile", "Kacang almond", "Salmon (Omega-3)", "Blueberry", "Bayam", "Oatmeal", "Pisang", "Teh hijau"],
            avoid: &["Kafein berlebihan", "Alkohol", "Gula berlebihan", "Makanan olahan", "Minuman energi"],
            reason: "Anda mengalami stres/kecemasan. Selain makanan, disarankan untuk meditasi 10 menit, mendengarkan musik tenang, dan menulis jurnal perasaan.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::SleepDisturbance, S::Insomnia, S::TroubleSleeping]),
        template: FoodTemplate {
            category: "sleep_disorder",
            title: "😴 Makanan untuk Kualitas Tidur",
            description: "Makanan yang membantu meningkatkan kualitas tidur Anda",
            foods: &["Susu hangat", "Kacang almond", "Pisang", "Kiwi", "Ceri", "Teh chamomile", "Ikan salmon", "Nasi putih (porsi kecil)", "Oatmeal", "Madu"],
            avoid: &["Kafein (kopi, teh, cokelat) setelah jam 2 siang", "Alkohol", "Makanan pedas malam hari", "Makanan berat sebelum tidur", "Minuman energi"],
            reason: "Anda mengalami gangguan tidur. Hindari kafein setelah jam 2 siang, jaga suhu kamar sejuk (18-22°C), dan lakukan relaksasi ringan sebelum tidur seperti pernapasan 4-7-8.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::PhysicalFatigue, S::EmotionalExhaustion, S::Burnout, S::Weakness, S::Lethargy]),
        template: FoodTemplate {
            category: "fatigue_burnout",
            title: "⚡ Makanan Penambah Energi",
            description: "Nutrisi untuk melawan kelelahan dan memulihkan energi",
            foods: &["Bayam (zat besi)", "Pisang", "Kacang almond", "Telur", "Salmon", "Ubi jalar", "Cokelat hitam", "Quinoa", "Air kelapa", "Kurma", "Daging sapi tanpa lemak"],
            avoid: &["Gula berlebihan (spike energi)", "Kafein berlebihan", "Alkohol", "Makanan cepat saji", "Minuman bersoda"],
            reason: "Anda mengalami kelelahan/burnout. Selain pola makan, disarankan untuk istirahat cukup, lakukan aktivitas luar ruangan, dan luangkan waktu berkualitas bersama keluarga.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::Gastritis, S::Indigestion, S::Nausea, S::Bloating]),
        template: FoodTemplate {
            category: "digestive",
            title: "🍵 Makanan untuk Pencernaan Sehat",
            description: "Makanan yang mudah dicerna dan menenangkan lambung",
            foods: &["Pisang", "Nasi putih", "Roti tawar", "Ayam rebus", "Jahe hangat", "Pepaya", "Yogurt probiotik", "Oatmeal", "Kentang rebus"],
            avoid: &["Makanan pedas", "Kopi", "Alkohol", "Makanan berminyak", "Jeruk/makanan asam", "Cokelat", "Minuman bersoda"],
            reason: "Anda mengalami gangguan pencernaan. Makan dalam porsi kecil tapi sering, hindari makan terlalu cepat, dan jangan langsung berbaring setelah makan.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresent(S::HighCholesterol),
        template: FoodTemplate {
            category: "cholesterol",
            title: "💚 Makanan untuk Kolesterol Tinggi (Ref: Alodokter)",
            description: "Perbanyak serat larut dan omega-3. Hindari lemak jenuh dan trans. Gunakan minyak zaitun untuk memasak.",
            foods: &["Oatmeal & biji-bijian utuh (serat larut)", "Ikan omega-3 (salmon, makarel, sarden)", "Kacang walnut & almond", "Alpukat", "Minyak zaitun", "Sayuran hijau (bayam, brokoli)", "Buah tinggi serat (apel, pir, stroberi)", "Tahu & tempe", "Bawang putih", "Teh hijau"],
            avoid: &["Daging merah berlemak", "Jeroan (hati, otak, ampela)", "Kulit ayam & bebek", "Kuning telur berlebihan", "Makanan gorengan", "Mentega & margarin", "Santan kental", "Susu full cream & es krim", "Makanan olahan (lemak trans)"],
            reason: "Sumber: Alodokter. Serat larut dari oatmeal membantu menurunkan kolesterol. Omega-3 dari ikan meningkatkan kolesterol baik (HDL). Selalu baca label kemasan untuk menghindari lemak trans. Olahraga teratur dan jaga berat badan ideal.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::Headache, S::Migraine]),
        template: FoodTemplate {
            category: "headache",
            title: "🧠 Makanan Pereda Sakit Kepala",
            description: "Makanan yang dapat membantu mengurangi sakit kepala",
            foods: &["Air putih (dehidrasi sering sebabkan sakit kepala)", "Magnesium (kacang, bayam)", "Jahe", "Ikan berlemak", "Semangka", "Kentang", "Pisang", "Kopi (secukupnya)"],
            avoid: &["Keju tua", "Makanan fermentasi berlebihan", "Alkohol (terutama red wine)", "MSG", "Pemanis buatan", "Cokelat berlebihan"],
            reason: "Anda mengalami sakit kepala. Pastikan cukup minum air, istirahat di ruangan gelap, dan hindari trigger makanan.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::Diabetes, S::HighBloodSugar, S::Hyperglycemia]),
        template: FoodTemplate {
            category: "diabetes",
            title: "🩸 Makanan untuk Diabetes (Ref: Alodokter)",
            description: "Pilih karbohidrat kompleks dan makanan indeks glikemik rendah. Masak dengan cara dikukus, direbus, atau dipanggang.",
            foods: &["Beras merah (pengganti nasi putih)", "Oatmeal & gandum utuh", "Sayuran hijau (bayam, brokoli, kangkung, sawi)", "Ikan omega-3 (salmon, makarel, tuna, sarden)", "Tahu, tempe, edamame", "Buah segar (apel, pir, jeruk, stroberi, alpukat)", "Yogurt rendah lemak tanpa gula", "Kacang-kacangan", "Telur (putih telur)"],
            avoid: &["Nasi putih berlebihan", "Roti putih & kue manis", "Gula pasir & gula jawa", "Minuman manis & bersoda", "Jus kemasan", "Makanan gorengan", "Daging berlemak & jeroan", "Susu full cream", "Makanan dengan indeks glikemik tinggi"],
            reason: "Sumber: Alodokter. Penderita diabetes tetap boleh makan nasi, tapi pilih nasi merah dan batasi porsinya. Masak makanan dengan cara dikukus, direbus, atau dipanggang - hindari digoreng. Kontrol porsi makan dan rutin cek gula darah.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::Anemia, S::LowBlood, S::Pallor, S::Weakness]),
        template: FoodTemplate {
            category: "anemia",
            title: "🩸 Makanan untuk Anemia",
            description: "Makanan tinggi zat besi untuk meningkatkan produksi sel darah merah",
            foods: &["Daging sapi tanpa lemak", "Hati ayam/sapi", "Bayam", "Brokoli", "Kacang merah", "Tahu tempe", "Telur", "Kerang", "Kurma", "Bit", "Kismis", "Vitamin C untuk penyerapan zat besi"],
            avoid: &["Teh bersamaan dengan makan (menghambat penyerapan zat besi)", "Kopi bersamaan dengan makan", "Susu bersamaan dengan suplemen zat besi", "Makanan tinggi kalsium saat makan"],
            reason: "Anda mengalami anemia. Konsumsi makanan tinggi zat besi bersama vitamin C untuk penyerapan optimal. Hindari teh/kopi 1 jam sebelum dan sesudah makan.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::Constipation, S::ConstipationClinical, S::DifficultBowelMovement]),
        template: FoodTemplate {
            category: "constipation",
            title: "🥗 Makanan untuk Melancarkan Pencernaan",
            description: "Makanan tinggi serat untuk mengatasi sembelit",
            foods: &["Pepaya", "Pisang matang", "Sayuran hijau", "Kacang-kacangan", "Oatmeal", "Buah pir", "Prune (buah plum kering)", "Air putih minimal 8 gelas", "Chia seed", "Yogurt probiotik", "Ubi jalar"],
            avoid: &["Makanan olahan", "Daging merah berlebihan", "Makanan berlemak tinggi", "Alkohol", "Minuman berkafein berlebihan", "Makanan cepat saji"],
            reason: "Anda mengalami sembelit. Perbanyak serat dan air putih, serta lakukan olahraga ringan seperti jalan kaki untuk membantu pergerakan usus.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::UricAcid, S::Gout, S::JointPain]),
        template: FoodTemplate {
            category: "gout",
            title: "🦴 Makanan untuk Asam Urat",
            description: "Makanan rendah purin untuk mengontrol asam urat",
            foods: &["Air putih minimal 10 gelas", "Sayuran (kecuali tertentu)", "Buah ceri", "Apel", "Pisang", "Susu rendah lemak", "Telur", "Tahu", "Kentang", "Roti gandum"],
            avoid: &["Jeroan (hati, ampela, otak)", "Daging merah", "Seafood (udang, kerang, kepiting)", "Alkohol (terutama bir)", "Minuman manis fruktosa tinggi", "Kacang-kacangan berlebihan", "Bayam dan asparagus berlebihan", "Sarden dan ikan teri"],
            reason: "Anda memiliki asam urat tinggi. Hindari makanan tinggi purin, perbanyak minum air putih, dan jaga berat badan ideal.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::Pregnant, S::Pregnancy, S::MorningSickness]),
        template: FoodTemplate {
            category: "pregnancy",
            title: "🤰 Makanan untuk Ibu Hamil",
            description: "Nutrisi penting untuk kesehatan ibu dan janin",
            foods: &["Sayuran hijau (asam folat)", "Salmon (omega-3, DHA)", "Telur", "Susu dan produk susu", "Daging tanpa lemak", "Kacang-kacangan", "Buah-buahan segar", "Ubi jalar", "Yogurt", "Alpukat", "Kurma"],
            avoid: &["Ikan tinggi merkuri (hiu, king mackerel)", "Daging/telur mentah", "Keju lunak tidak dipasteurisasi", "Kafein berlebihan", "Alkohol", "Jamu-jamuan tanpa resep dokter", "Makanan laut mentah (sushi)", "Nanas muda berlebihan"],
            reason: "Anda sedang hamil. Pastikan mendapat asam folat, zat besi, kalsium, dan protein cukup. Konsultasikan dengan dokter untuk suplemen prenatal.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::Allergy, S::Itching, S::SkinRash]),
        template: FoodTemplate {
            category: "allergy",
            title: "🚫 Tips untuk Alergi Makanan",
            description: "Panduan menghindari alergen dan alternatif makanan",
            foods: &["Makanan segar non-olahan", "Sayuran dan buah lokal", "Nasi", "Daging ayam segar", "Ikan segar (jika tidak alergi)", "Minyak zaitun", "Air kelapa"],
            avoid: &["Makanan yang mengandung alergen Anda", "Makanan olahan (sering mengandung alergen tersembunyi)", "Saus dan bumbu kemasan", "Makanan restoran tanpa info alergen", "Susu (jika alergi susu)", "Kacang (jika alergi kacang)", "Seafood (jika alergi)"],
            reason: "Anda memiliki riwayat alergi. Selalu baca label makanan, bawa obat alergi, dan konsultasikan dengan dokter untuk tes alergi lengkap.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::Cough, S::ProductiveCough, S::ItchyThroat]),
        template: FoodTemplate {
            category: "cough",
            title: "🍵 Makanan Pereda Batuk",
            description: "Makanan yang membantu meredakan batuk dan melegakan tenggorokan",
            foods: &["Madu hangat", "Jahe hangat", "Lemon hangat dengan madu", "Sup ayam", "Teh herbal", "Air hangat", "Nanas", "Bawang putih", "Kunyit"],
            avoid: &["Makanan dingin/es", "Makanan berminyak", "Gorengan", "Makanan pedas", "Susu (dapat memperbanyak lendir)", "Makanan manis berlebihan"],
            reason: "Anda mengalami batuk. Perbanyak minum air hangat, konsumsi madu untuk meredakan tenggorokan, dan istirahat yang cukup.",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresentAnyOf(&[S::Diarrhea, S::LooseStool, S::Stomachache]),
        template: FoodTemplate {
            category: "diarrhea",
            title: "🍌 Makanan untuk Diare (BRAT Diet)",
            description: "Makanan yang mudah dicerna untuk memulihkan pencernaan",
            foods: &["Pisang", "Nasi putih", "Roti tawar", "Apel (tanpa kulit)", "Oralit/larutan gula garam", "Air kelapa", "Kentang rebus", "Wortel rebus", "Bubur"],
            avoid: &["Susu dan produk susu", "Makanan pedas", "Makanan berminyak", "Sayuran mentah", "Buah-buahan asam", "Kafein", "Alkohol", "Makanan tinggi serat"],
            reason: "Anda mengalami diare. Fokus pada rehidrasi dengan oralit/air kelapa, makan BRAT diet (Banana, Rice, Applesauce, Toast), dan hindari makanan yang merangsang usus.",
        },
    },
];
