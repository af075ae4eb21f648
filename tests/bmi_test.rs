use healthtracker::core::bmi;
use healthtracker::models::health::BmiCategory;

#[test]
fn test_calculate_uses_height_in_meters() {
    let v = bmi::calculate(70.0, 175.0);
    assert!((v - 22.857).abs() < 0.01, "got {}", v);
}

#[test]
fn test_calculate_zero_height_is_zero() {
    assert_eq!(bmi::calculate(70.0, 0.0), 0.0);
    assert_eq!(bmi::classify(bmi::calculate(70.0, 0.0)), BmiCategory::Underweight);
}

#[test]
fn test_classify_lower_bounds_inclusive() {
    assert_eq!(bmi::classify(18.49), BmiCategory::Underweight);
    assert_eq!(bmi::classify(18.5), BmiCategory::Normal);
    assert_eq!(bmi::classify(24.99), BmiCategory::Normal);
    assert_eq!(bmi::classify(25.0), BmiCategory::Overweight);
    assert_eq!(bmi::classify(29.99), BmiCategory::Overweight);
    assert_eq!(bmi::classify(30.0), BmiCategory::Obese);
    assert_eq!(bmi::classify(45.0), BmiCategory::Obese);
}

#[test]
fn test_category_serializes_capitalized() {
    let json = serde_json::to_string(&BmiCategory::Overweight).unwrap();
    assert_eq!(json, "\"Overweight\"");
}
