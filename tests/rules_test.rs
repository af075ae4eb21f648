mod common;

use healthtracker::core::matcher::Trigger;
use healthtracker::core::rules::{self, Matched, Rule, Template};
use healthtracker::models::health::BmiCategory;
use healthtracker::models::symptom::SymptomKind;

struct Tip {
    key: &'static str,
    text: &'static str,
}

impl Template for Tip {
    type Entry = String;

    fn identity_key(&self) -> &'static str {
        self.key
    }

    fn build(&self) -> String {
        self.text.to_string()
    }
}

static SHARED_KEY_RULES: &[Rule<Tip>] = &[
    Rule {
        trigger: Trigger::BmiCategoryIn(&[BmiCategory::Normal]),
        template: Tip {
            key: "hydration",
            text: "first",
        },
    },
    Rule {
        trigger: Trigger::SymptomPresent(SymptomKind::Fever),
        template: Tip {
            key: "rest",
            text: "rest",
        },
    },
    Rule {
        trigger: Trigger::BmiCategoryIn(&[BmiCategory::Normal, BmiCategory::Overweight]),
        template: Tip {
            key: "hydration",
            text: "second",
        },
    },
];

#[test]
fn test_matched_push_rejects_repeated_key() {
    let mut out = Matched::default();
    assert!(out.push("hydration", "first"));
    assert!(!out.push("hydration", "second"));
    assert!(out.push("rest", "third"));
    assert_eq!(out.into_entries(), vec!["first", "third"]);
}

#[test]
fn test_scan_keeps_first_rule_for_shared_key() {
    let mut out = Matched::default();
    rules::scan(SHARED_KEY_RULES, &common::ctx(65.0, &["Demam"]), &mut out);
    assert_eq!(out.into_entries(), vec!["first", "rest"]);
}

#[test]
fn test_scan_later_rule_fills_in_when_first_does_not_fire() {
    let mut out = Matched::default();
    rules::scan(SHARED_KEY_RULES, &common::ctx(80.0, &[]), &mut out);
    assert_eq!(out.into_entries(), vec!["second"]);
}

#[test]
fn test_scan_appends_to_existing_entries() {
    let mut out = Matched::default();
    out.push("hydration", "seeded".to_string());
    rules::scan(SHARED_KEY_RULES, &common::ctx(65.0, &[]), &mut out);
    assert_eq!(out.into_entries(), vec!["seeded"]);
}
