use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomType {
    Physical,
    Mental,
}

impl SymptomType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Mental => "mental",
        }
    }
}

impl std::fmt::Display for SymptomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymptomType {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "physical" => Ok(Self::Physical),
            "mental" => Ok(Self::Mental),
            _ => anyhow::bail!("invalid symptom type: {} (expected physical/mental)", s),
        }
    }
}

/// Every symptom identifier the catalog or a recommendation rule refers to.
///
/// Rules match on these variants; the Indonesian display name is only used
/// at the edges (logging input, listing the catalog, rendering output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SymptomKind {
    Fever,
    Flu,
    Cough,
    Cold,
    Headache,
    HighBloodPressure,
    HighCholesterol,
    Gastritis,
    Indigestion,
    MusclePain,
    PhysicalFatigue,
    Obesity,
    JointPain,
    ShortnessOfBreath,
    Dizziness,
    Stress,
    Anxiety,
    MildDepression,
    Irritability,
    SleepDisturbance,
    Burnout,
    SocialLoneliness,
    PoorConcentration,
    MoodSwing,
    Overthinking,
    Nausea,
    Bloating,
    Cholesterol,
    Migraine,
    Diabetes,
    HighBloodSugar,
    Hyperglycemia,
    Anemia,
    LowBlood,
    Pallor,
    Weakness,
    Lethargy,
    Constipation,
    ConstipationClinical,
    DifficultBowelMovement,
    UricAcid,
    Gout,
    Pregnant,
    Pregnancy,
    MorningSickness,
    Allergy,
    Itching,
    SkinRash,
    ProductiveCough,
    ItchyThroat,
    Diarrhea,
    LooseStool,
    Stomachache,
    Hypertension,
    Anxious,
    Restlessness,
    Insomnia,
    TroubleSleeping,
    EmotionalExhaustion,
}

impl SymptomKind {
    pub const ALL: [SymptomKind; 59] = [
        Self::Fever,
        Self::Flu,
        Self::Cough,
        Self::Cold,
        Self::Headache,
        Self::HighBloodPressure,
        Self::HighCholesterol,
        Self::Gastritis,
        Self::Indigestion,
        Self::MusclePain,
        Self::PhysicalFatigue,
        Self::Obesity,
        Self::JointPain,
        Self::ShortnessOfBreath,
        Self::Dizziness,
        Self::Stress,
        Self::Anxiety,
        Self::MildDepression,
        Self::Irritability,
        Self::SleepDisturbance,
        Self::Burnout,
        Self::SocialLoneliness,
        Self::PoorConcentration,
        Self::MoodSwing,
        Self::Overthinking,
        Self::Nausea,
        Self::Bloating,
        Self::Cholesterol,
        Self::Migraine,
        Self::Diabetes,
        Self::HighBloodSugar,
        Self::Hyperglycemia,
        Self::Anemia,
        Self::LowBlood,
        Self::Pallor,
        Self::Weakness,
        Self::Lethargy,
        Self::Constipation,
        Self::ConstipationClinical,
        Self::DifficultBowelMovement,
        Self::UricAcid,
        Self::Gout,
        Self::Pregnant,
        Self::Pregnancy,
        Self::MorningSickness,
        Self::Allergy,
        Self::Itching,
        Self::SkinRash,
        Self::ProductiveCough,
        Self::ItchyThroat,
        Self::Diarrhea,
        Self::LooseStool,
        Self::Stomachache,
        Self::Hypertension,
        Self::Anxious,
        Self::Restlessness,
        Self::Insomnia,
        Self::TroubleSleeping,
        Self::EmotionalExhaustion,
    ];

    /// Name as logged by users and shown in the catalog.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Fever => "Demam",
            Self::Flu => "Flu",
            Self::Cough => "Batuk",
            Self::Cold => "Pilek",
            Self::Headache => "Sakit Kepala",
            Self::HighBloodPressure => "Tekanan Darah Tinggi",
            Self::HighCholesterol => "Kolesterol Tinggi",
            Self::Gastritis => "Maag",
            Self::Indigestion => "Gangguan Pencernaan",
            Self::MusclePain => "Nyeri Otot",
            Self::PhysicalFatigue => "Kelelahan Fisik",
            Self::Obesity => "Obesitas",
            Self::JointPain => "Nyeri Sendi",
            Self::ShortnessOfBreath => "Sesak Napas",
            Self::Dizziness => "Pusing",
            Self::Stress => "Stres",
            Self::Anxiety => "Kecemasan",
            Self::MildDepression => "Depresi Ringan",
            Self::Irritability => "Mudah Marah",
            Self::SleepDisturbance => "Gangguan Tidur",
            Self::Burnout => "Burnout",
            Self::SocialLoneliness => "Kesepian Sosial",
            Self::PoorConcentration => "Sulit Konsentrasi",
            Self::MoodSwing => "Mood Swing",
            Self::Overthinking => "Overthinking",
            Self::Nausea => "Mual",
            Self::Bloating => "Perut Kembung",
            Self::Cholesterol => "Kolesterol",
            Self::Migraine => "Migrain",
            Self::Diabetes => "Diabetes",
            Self::HighBloodSugar => "Gula Darah Tinggi",
            Self::Hyperglycemia => "Hiperglikemia",
            Self::Anemia => "Anemia",
            Self::LowBlood => "Kurang Darah",
            Self::Pallor => "Pucat",
            Self::Weakness => "Lemas",
            Self::Lethargy => "Lesu",
            Self::Constipation => "Sembelit",
            Self::ConstipationClinical => "Konstipasi",
            Self::DifficultBowelMovement => "Susah BAB",
            Self::UricAcid => "Asam Urat",
            Self::Gout => "Gout",
            Self::Pregnant => "Hamil",
            Self::Pregnancy => "Kehamilan",
            Self::MorningSickness => "Morning Sickness",
            Self::Allergy => "Alergi",
            Self::Itching => "Gatal-gatal",
            Self::SkinRash => "Ruam Kulit",
            Self::ProductiveCough => "Batuk Berdahak",
            Self::ItchyThroat => "Tenggorokan Gatal",
            Self::Diarrhea => "Diare",
            Self::LooseStool => "Mencret",
            Self::Stomachache => "Sakit Perut",
            Self::Hypertension => "Hipertensi",
            Self::Anxious => "Cemas",
            Self::Restlessness => "Gelisah",
            Self::Insomnia => "Insomnia",
            Self::TroubleSleeping => "Sulit Tidur",
            Self::EmotionalExhaustion => "Kelelahan Emosional (Burnout)",
        }
    }

    /// Exact-match lookup; no trimming or case folding.
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.display_name() == name)
    }
}

impl std::fmt::Display for SymptomKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Symptoms offered to users when logging physical complaints.
pub const PHYSICAL_CATALOG: [SymptomKind; 15] = [
    SymptomKind::Fever,
    SymptomKind::Flu,
    SymptomKind::Cough,
    SymptomKind::Cold,
    SymptomKind::Headache,
    SymptomKind::HighBloodPressure,
    SymptomKind::HighCholesterol,
    SymptomKind::Gastritis,
    SymptomKind::Indigestion,
    SymptomKind::MusclePain,
    SymptomKind::PhysicalFatigue,
    SymptomKind::Obesity,
    SymptomKind::JointPain,
    SymptomKind::ShortnessOfBreath,
    SymptomKind::Dizziness,
];

/// Symptoms offered to users when logging mental complaints.
pub const MENTAL_CATALOG: [SymptomKind; 10] = [
    SymptomKind::Stress,
    SymptomKind::Anxiety,
    SymptomKind::MildDepression,
    SymptomKind::Irritability,
    SymptomKind::SleepDisturbance,
    SymptomKind::Burnout,
    SymptomKind::SocialLoneliness,
    SymptomKind::PoorConcentration,
    SymptomKind::MoodSwing,
    SymptomKind::Overthinking,
];

pub const MIN_SEVERITY: u8 = 1;
pub const MAX_SEVERITY: u8 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symptom {
    pub id: String,
    pub symptom_type: SymptomType,
    pub symptom_name: String,
    pub severity: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub logged_at: DateTime<Utc>,
}

impl Symptom {
    pub fn new(symptom_type: SymptomType, symptom_name: String, severity: u8) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            symptom_type,
            symptom_name,
            severity,
            notes: None,
            logged_at: Utc::now(),
        }
    }

    /// Resolved identifier, or `None` for free-form names outside the catalog.
    pub fn kind(&self) -> Option<SymptomKind> {
        SymptomKind::from_display_name(&self.symptom_name)
    }
}
