mod common;

use chrono::NaiveDate;
use healthtracker::core::goal::{self, GoalStats, NewGoal};
use healthtracker::models::goal::{Goal, GoalType, GoalView};

fn new_goal(title: &str, goal_type: GoalType, target: f64) -> NewGoal {
    NewGoal {
        title: title.to_string(),
        description: None,
        goal_type,
        target,
        unit: None,
        deadline: None,
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

// ── model ────────────────────────────────────────────────────────────────────

#[test]
fn test_progress_capped_and_zero_target() {
    let mut g = Goal::new("Lari".into(), GoalType::Exercise, 10.0);
    g.current = 4.0;
    assert!((g.progress() - 40.0).abs() < 1e-9);
    g.current = 25.0;
    assert_eq!(g.progress(), 100.0);
    g.target = 0.0;
    assert_eq!(g.progress(), 0.0);
}

#[test]
fn test_days_left() {
    let mut g = Goal::new("Tidur".into(), GoalType::Sleep, 8.0);
    assert_eq!(g.days_left(date("2025-03-01")), None);
    g.deadline = Some(date("2025-03-11"));
    assert_eq!(g.days_left(date("2025-03-01")), Some(10));
    assert_eq!(g.days_left(date("2025-03-11")), Some(0));
    // Past deadlines floor at zero.
    assert_eq!(g.days_left(date("2025-04-01")), Some(0));
}

#[test]
fn test_goal_type_parse_and_icon() {
    assert_eq!("water".parse::<GoalType>().unwrap(), GoalType::Water);
    assert_eq!(GoalType::Weight.icon(), "⚖️");
    assert_eq!(GoalType::Custom.icon(), "🎯");
    assert!("diet".parse::<GoalType>().is_err());
}

#[test]
fn test_goal_view_serializes_flat() {
    let mut g = Goal::new("Minum".into(), GoalType::Water, 8.0);
    g.current = 2.0;
    let v = serde_json::to_value(GoalView::new(g, date("2025-03-01"))).unwrap();
    assert_eq!(v["goal_type"], "water");
    assert_eq!(v["icon"], "💧");
    assert_eq!(v["progress"], 25.0);
    assert!(v["days_left"].is_null());
    assert_eq!(v["current"], 2.0);
}

// ── storage + operations ─────────────────────────────────────────────────────

#[test]
fn test_create_and_list_newest_first() {
    let (_dir, db) = common::setup_db();
    let first = goal::create_goal(&db, new_goal("Turun 5 kg", GoalType::Weight, 5.0)).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));
    let mut input = new_goal("  Lari 50 km  ", GoalType::Exercise, 50.0);
    input.unit = Some("km".into());
    input.deadline = Some(date("2030-01-31"));
    let second = goal::create_goal(&db, input).unwrap();
    assert_eq!(second.title, "Lari 50 km");

    let goals = goal::list_goals(&db, date("2030-01-01")).unwrap();
    let ids: Vec<&str> = goals.iter().map(|v| v.goal.id.as_str()).collect();
    assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);
    assert_eq!(goals[0].goal.unit.as_deref(), Some("km"));
    assert_eq!(goals[0].goal.deadline, Some(date("2030-01-31")));
    assert_eq!(goals[0].days_left, Some(30));
    assert_eq!(goals[1].days_left, None);
}

#[test]
fn test_create_rejects_bad_input() {
    let (_dir, db) = common::setup_db();
    assert!(goal::create_goal(&db, new_goal("   ", GoalType::Custom, 1.0)).is_err());
    for target in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        assert!(
            goal::create_goal(&db, new_goal("X", GoalType::Custom, target)).is_err(),
            "target {} accepted",
            target
        );
    }
    assert!(db.list_goals().unwrap().is_empty());
}

#[test]
fn test_progress_reaching_target_completes() {
    let (_dir, db) = common::setup_db();
    let g = goal::create_goal(&db, new_goal("Air", GoalType::Water, 8.0)).unwrap();

    let g = goal::update_progress(&db, &g.id, 5.0).unwrap();
    assert!(!g.is_completed);
    let g = goal::update_progress(&db, &g.id, 8.0).unwrap();
    assert!(g.is_completed);

    // Dropping below the target keeps the completion.
    let g = goal::update_progress(&db, &g.id, 3.0).unwrap();
    assert!(g.is_completed);
    let stored = db.get_goal(&g.id).unwrap().unwrap();
    assert_eq!(stored.current, 3.0);
    assert!(stored.is_completed);
}

#[test]
fn test_progress_rejects_negative_and_unknown() {
    let (_dir, db) = common::setup_db();
    let g = goal::create_goal(&db, new_goal("Air", GoalType::Water, 8.0)).unwrap();
    assert!(goal::update_progress(&db, &g.id, -1.0).is_err());
    assert!(goal::update_progress(&db, &g.id, f64::NAN).is_err());
    let err = goal::update_progress(&db, "missing", 1.0).unwrap_err();
    assert!(err.to_string().contains("goal not found"));
}

#[test]
fn test_toggle_and_stats() {
    let (_dir, db) = common::setup_db();
    assert_eq!(
        goal::stats(&db).unwrap(),
        GoalStats {
            total: 0,
            completed: 0,
            in_progress: 0
        }
    );

    let a = goal::create_goal(&db, new_goal("A", GoalType::Custom, 1.0)).unwrap();
    goal::create_goal(&db, new_goal("B", GoalType::Custom, 1.0)).unwrap();
    goal::create_goal(&db, new_goal("C", GoalType::Custom, 1.0)).unwrap();

    assert!(goal::toggle_complete(&db, &a.id).unwrap().is_completed);
    assert_eq!(
        goal::stats(&db).unwrap(),
        GoalStats {
            total: 3,
            completed: 1,
            in_progress: 2
        }
    );

    assert!(!goal::toggle_complete(&db, &a.id).unwrap().is_completed);
    assert_eq!(goal::stats(&db).unwrap().completed, 0);
}

#[test]
fn test_delete_goal() {
    let (_dir, db) = common::setup_db();
    let g = goal::create_goal(&db, new_goal("A", GoalType::Custom, 1.0)).unwrap();
    assert!(goal::delete_goal(&db, &g.id).unwrap());
    assert!(!goal::delete_goal(&db, &g.id).unwrap());
    assert!(db.get_goal(&g.id).unwrap().is_none());
}
