mod common;

use healthtracker::core::reminder::{self, ReminderUpdate};
use healthtracker::models::reminder::{ReminderType, ReminderView, normalize_time};

#[test]
fn test_normalize_time() {
    assert_eq!(normalize_time("7:05").unwrap(), "07:05");
    assert_eq!(normalize_time("21:00").unwrap(), "21:00");
    assert!(normalize_time("24:00").is_err());
    assert!(normalize_time("noon").is_err());
}

#[test]
fn test_list_seeds_defaults_once_in_time_order() {
    let (_dir, mut db) = common::setup_db();
    let reminders = reminder::list(&mut db).unwrap();
    assert_eq!(reminders.len(), 10);
    assert_eq!(reminders[0].label, "Meditasi");
    assert_eq!(reminders[0].time, "06:30");
    assert_eq!(reminders[9].label, "Persiapan Tidur");
    assert!(reminders.iter().all(|r| r.is_active));
    let times: Vec<&str> = reminders.iter().map(|r| r.time.as_str()).collect();
    let mut sorted = times.clone();
    sorted.sort();
    assert_eq!(times, sorted);

    // Listing again does not seed a second time.
    assert_eq!(reminder::list(&mut db).unwrap().len(), 10);
}

#[test]
fn test_no_seeding_when_user_has_reminders() {
    let (_dir, mut db) = common::setup_db();
    reminder::create(&mut db, ReminderType::Custom, "Vitamin", "9:15").unwrap();
    let reminders = reminder::list(&mut db).unwrap();
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].time, "09:15");
}

#[test]
fn test_create_validates_label_and_time() {
    let (_dir, mut db) = common::setup_db();
    assert!(reminder::create(&mut db, ReminderType::Water, "  ", "08:00").is_err());
    assert!(reminder::create(&mut db, ReminderType::Water, "Minum", "8am").is_err());
    assert_eq!(db.count_reminders().unwrap(), 0);
}

#[test]
fn test_update_changes_only_given_fields() {
    let (_dir, mut db) = common::setup_db();
    let r = reminder::create(&mut db, ReminderType::Meal, "Makan", "12:00").unwrap();

    let updated = reminder::update(
        &db,
        &r.id,
        ReminderUpdate {
            time: Some("12:45"),
            is_active: Some(false),
            ..ReminderUpdate::default()
        },
    )
    .unwrap();
    assert_eq!(updated.label, "Makan");
    assert_eq!(updated.reminder_type, ReminderType::Meal);
    assert_eq!(updated.time, "12:45");
    assert!(!updated.is_active);
    assert_eq!(db.get_reminder(&r.id).unwrap().unwrap(), updated);

    assert!(
        reminder::update(
            &db,
            &r.id,
            ReminderUpdate {
                time: Some("25:00"),
                ..ReminderUpdate::default()
            },
        )
        .is_err()
    );
    let err = reminder::update(&db, "missing", ReminderUpdate::default()).unwrap_err();
    assert!(err.to_string().contains("reminder not found"));
}

#[test]
fn test_toggle_and_delete() {
    let (_dir, mut db) = common::setup_db();
    let r = reminder::create(&mut db, ReminderType::Rest, "Tidur", "22:00").unwrap();
    assert!(!reminder::toggle(&db, &r.id).unwrap().is_active);
    assert!(reminder::toggle(&db, &r.id).unwrap().is_active);

    assert!(reminder::delete(&db, &r.id).unwrap());
    assert!(!reminder::delete(&db, &r.id).unwrap());
    assert!(reminder::toggle(&db, &r.id).is_err());
}

#[test]
fn test_view_carries_icon() {
    let (_dir, mut db) = common::setup_db();
    let r = reminder::create(&mut db, ReminderType::Meditation, "Napas", "06:00").unwrap();
    let v = serde_json::to_value(ReminderView::from(r)).unwrap();
    assert_eq!(v["icon"], "🧘");
    assert_eq!(v["reminder_type"], "meditation");
    assert_eq!(v["is_active"], true);
}
