use crate::models::health::BmiCategory;

/// Body mass index from weight (kg) and height (cm).
///
/// A non-positive height yields 0, which [`classify`] reads as underweight.
pub fn calculate(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Map a BMI value to its band. Lower bounds are inclusive.
pub fn classify(bmi: f64) -> BmiCategory {
    match bmi {
        b if b < 18.5 => BmiCategory::Underweight,
        b if b < 25.0 => BmiCategory::Normal,
        b if b < 30.0 => BmiCategory::Overweight,
        _ => BmiCategory::Obese,
    }
}
