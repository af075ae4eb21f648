mod common;

use chrono::{Duration, Utc};
use healthtracker::core::progress::{self, GraphPeriod};
use healthtracker::models::health::EmotionalState;

#[test]
fn test_period_parse() {
    assert_eq!("week".parse::<GraphPeriod>().unwrap(), GraphPeriod::Week);
    assert_eq!("month".parse::<GraphPeriod>().unwrap(), GraphPeriod::Month);
    assert_eq!("year".parse::<GraphPeriod>().unwrap(), GraphPeriod::Year);
    assert!("decade".parse::<GraphPeriod>().is_err());
    assert_eq!(GraphPeriod::default(), GraphPeriod::Week);
}

#[test]
fn test_graph_windows() {
    let (_dir, db) = common::setup_db();
    let today = Utc::now().date_naive();
    for days in [2, 20, 100, 400] {
        db.insert_health_record(&common::make_record(70.0, 170.0, today - Duration::days(days)))
            .unwrap();
    }

    assert_eq!(progress::graph(&db, GraphPeriod::Week).unwrap().points.len(), 1);
    assert_eq!(progress::graph(&db, GraphPeriod::Month).unwrap().points.len(), 2);
    assert_eq!(progress::graph(&db, GraphPeriod::Year).unwrap().points.len(), 3);
}

#[test]
fn test_graph_points_oldest_first() {
    let (_dir, db) = common::setup_db();
    let today = Utc::now().date_naive();
    let mut newer = common::make_record(68.0, 170.0, today - Duration::days(1));
    newer.emotional_state = EmotionalState::Happy;
    db.insert_health_record(&newer).unwrap();
    db.insert_health_record(&common::make_record(71.0, 170.0, today - Duration::days(4)))
        .unwrap();

    let graph = progress::graph(&db, GraphPeriod::Week).unwrap();
    assert_eq!(graph.period, "week");
    assert_eq!(graph.points.len(), 2);
    assert_eq!(graph.points[0].weight, 71.0);
    assert_eq!(graph.points[1].weight, 68.0);
    assert_eq!(graph.points[1].emotional_state, EmotionalState::Happy);
    assert_eq!(
        graph.points[1].date,
        (today - Duration::days(1)).format("%Y-%m-%d").to_string()
    );
}

#[test]
fn test_graph_empty() {
    let (_dir, db) = common::setup_db();
    let graph = progress::graph(&db, GraphPeriod::Month).unwrap();
    assert_eq!(graph.period, "month");
    assert!(graph.points.is_empty());
}
