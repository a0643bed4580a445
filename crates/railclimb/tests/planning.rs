//! End-to-end planning from climb requests.

use std::fs;
use std::path::PathBuf;

use railclimb::prelude::*;
use railclimb::{plan, plan_file, ConfigError, PlanError, RailclimbError};

fn coal_drag(difficulty: Difficulty) -> ClimbConfig {
    ClimbConfig::new()
        .with_grade(0.1)
        .with_difficulty(difficulty)
        .with_stock(StockEntry::new("climax"))
        .with_stock(StockEntry::new("hopper").with_cargo("coal").with_count(6))
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("railclimb-{}-{}", std::process::id(), name))
}

#[test]
fn test_loaded_drag_needs_two_trips() {
    let plan = plan(&coal_drag(Difficulty::Realistic)).unwrap().unwrap();

    assert_eq!(plan.len(), 2);
    assert_eq!(plan.round_trip_count(), 1);
    for trip in &plan {
        assert_eq!(trip.ascending.len(), 4);
        assert!(trip.ascending.can_climb(0.1, 1.0));
    }
}

#[test]
fn test_casual_cargo_is_weightless() {
    let plan = plan(&coal_drag(Difficulty::Casual)).unwrap().unwrap();
    assert_eq!(plan.len(), 1);
    assert_eq!(plan.trips()[0].ascending.len(), 7);
    assert_eq!(plan.trips()[0].returning, None);
}

#[test]
fn test_helper_locomotive_is_collected() {
    let config = ClimbConfig::new()
        .with_grade(0.1)
        .with_collect_net(true)
        .with_stock(StockEntry::new("climax"))
        .with_stock(StockEntry::new("hopper").with_cargo("coal").with_count(3))
        .with_stock(StockEntry::new("heisler"))
        .with_stock(StockEntry::new("hopper").with_cargo("coal").with_count(3));

    let plan = plan(&config).unwrap().unwrap();
    assert_eq!(plan.len(), 2);
    assert_eq!(plan.initial_power().names(), vec!["Climax"]);
    assert_eq!(plan.final_power().names(), vec!["Climax", "Heisler"]);

    // Climax pulls three hoppers, the Heisler and one more hopper.
    let first = &plan.trips()[0];
    assert_eq!(first.ascending.len(), 6);
    assert_eq!(first.returning.as_ref().unwrap().names(), vec!["Climax"]);

    let second = &plan.trips()[1];
    assert_eq!(
        second.ascending.names(),
        vec!["Climax", "Heisler", "Hopper (Coal x10)", "Hopper (Coal x10)"]
    );
    assert_eq!(second.ascending.get(1).unwrap().name(), "Heisler");
    assert!(second.returning.is_none());
}

#[test]
fn test_underpowered_train() {
    let config = ClimbConfig::new()
        .with_grade(0.1)
        .with_stock(StockEntry::new("handcar"))
        .with_stock(StockEntry::new("caboose"));
    assert!(plan(&config).unwrap().is_none());
}

#[test]
fn test_invalid_request() {
    let config = coal_drag(Difficulty::Realistic).with_grade(f64::NAN);
    assert!(matches!(
        plan(&config),
        Err(PlanError::Config(ConfigError::Stock(RailclimbError::InvalidGrade(_))))
    ));

    let config = coal_drag(Difficulty::Realistic).with_stock(StockEntry::new("zeppelin"));
    assert!(matches!(
        plan(&config),
        Err(PlanError::Config(ConfigError::Stock(RailclimbError::UnknownStock(_))))
    ));
}

#[test]
fn test_plan_from_toml_file() {
    let path = temp_path("drag.toml");
    fs::write(
        &path,
        r#"
        grade = 0.1

        [[train]]
        stock = "climax"

        [[train]]
        stock = "hopper"
        cargo = "coal"
        count = 6
        "#,
    )
    .unwrap();

    let plan = plan_file(&path).unwrap().unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(plan.len(), 2);
}

#[test]
fn test_plan_from_yaml_file() {
    let path = temp_path("drag.yaml");
    fs::write(
        &path,
        "grade: 0.1\ndifficulty: casual\ntrain:\n  - stock: climax\n  - stock: hopper\n    cargo: coal\n    count: 6\n",
    )
    .unwrap();

    let plan = plan_file(&path).unwrap().unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(plan.len(), 1);
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        plan_file(temp_path("missing.toml")),
        Err(PlanError::Config(ConfigError::Io(_)))
    ));
}
