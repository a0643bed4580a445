//! Tests for climb configuration.

use railclimb_core::stock::Calculative;

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        grade = 0.08
        power_ratio = 0.9
        collect_net = true
        difficulty = "realistic"

        [[train]]
        stock = "climax"

        [[train]]
        stock = "hopper"
        cargo = "coal"
        quantity = 8
        count = 2
        name = "Hopper 1"
    "#;

    let config = ClimbConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.grade, 0.08);
    assert_eq!(config.power_ratio, 0.9);
    assert!(config.collect_net);
    assert_eq!(config.difficulty, Difficulty::Realistic);
    assert_eq!(config.train.len(), 2);
    assert_eq!(config.train[1].quantity, Some(8));
    assert_eq!(config.train[1].count, 2);

    let train = config.build_train().unwrap();
    assert_eq!(train.names(), vec!["Climax", "Hopper 1", "Hopper 1"]);
    assert_eq!(train.get(1).unwrap().mass(), 13200.0 + 8.0 * 2205.0);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        grade: 0.05
        difficulty: casual
        train:
          - stock: class70
          - stock: tanker
            cargo: crude_oil
            count: 3
    "#;

    let config = ClimbConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.grade, 0.05);
    assert_eq!(config.power_ratio, DEFAULT_POWER_RATIO);
    assert_eq!(config.difficulty, Difficulty::Casual);

    let train = config.build_train().unwrap();
    assert_eq!(train.len(), 4);
    assert_eq!(train.get(1).unwrap().mass(), 30135.0);
    assert_eq!(train.get(1).unwrap().name(), "Tanker (Crude Oil x12)");
}

#[test]
fn test_defaults() {
    let config = ClimbConfig::from_toml_str("").unwrap();
    assert_eq!(config, ClimbConfig::default());
    assert_eq!(config.grade, 0.0);
    assert_eq!(config.power_ratio, 1.0);
    assert!(!config.collect_net);
    assert_eq!(config.difficulty, Difficulty::Realistic);
    assert!(config.build_train().unwrap().is_empty());
}

#[test]
fn test_builder() {
    let config = ClimbConfig::new()
        .with_grade(0.1)
        .with_power_ratio(0.75)
        .with_collect_net(true)
        .with_difficulty(Difficulty::Medium)
        .with_stock(StockEntry::new("heisler").with_name("No. 3"))
        .with_stock(
            StockEntry::new("flatcar_stakes")
                .with_cargo("lumber")
                .with_quantity(2)
                .with_count(2),
        );

    assert_eq!(config.grade, 0.1);
    assert_eq!(config.power_ratio, 0.75);
    assert!(config.validate().is_ok());

    let train = config.build_train().unwrap();
    assert_eq!(train.len(), 3);
    assert_eq!(train.get(0).unwrap().name(), "No. 3");
    assert!(train.get(0).unwrap().tractive_effort() > 0.0);
    assert_eq!(train.get(2).unwrap().name(), "Flatcar - Stakes (Lumber x2)");
}

#[test]
fn test_validate() {
    assert!(matches!(
        ClimbConfig::new().with_grade(-0.01).validate(),
        Err(ConfigError::Stock(RailclimbError::InvalidGrade(_)))
    ));
    assert!(matches!(
        ClimbConfig::new().with_power_ratio(1.2).validate(),
        Err(ConfigError::Stock(RailclimbError::InvalidPowerRatio(_)))
    ));
}

#[test]
fn test_roster_errors() {
    let unknown = ClimbConfig::new().with_stock(StockEntry::new("monorail"));
    assert!(matches!(
        unknown.build_train(),
        Err(ConfigError::Stock(RailclimbError::UnknownStock(key))) if key == "monorail"
    ));

    let bad_cargo = ClimbConfig::new().with_stock(StockEntry::new("hopper").with_cargo("gravel"));
    assert!(matches!(
        bad_cargo.build_train(),
        Err(ConfigError::Stock(RailclimbError::UnknownCargo(_)))
    ));

    let overfull = ClimbConfig::new().with_stock(
        StockEntry::new("hopper").with_cargo("coal").with_quantity(11),
    );
    assert!(matches!(
        overfull.build_train(),
        Err(ConfigError::Stock(RailclimbError::CargoLimit { limit: 10, .. }))
    ));

    let loaded_loco = ClimbConfig::new().with_stock(StockEntry::new("climax").with_cargo("coal"));
    assert!(matches!(loaded_loco.build_train(), Err(ConfigError::Invalid(_))));

    let no_cargo = ClimbConfig::new().with_stock(StockEntry::new("hopper").with_quantity(3));
    assert!(matches!(no_cargo.build_train(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        ClimbConfig::from_toml_str("grade = \"steep\""),
        Err(ConfigError::Toml(_))
    ));
    assert!(matches!(
        ClimbConfig::from_yaml_str("train: 3"),
        Err(ConfigError::Yaml(_))
    ));
    assert!(matches!(
        ClimbConfig::load("/nonexistent/climb.toml"),
        Err(ConfigError::Io(_))
    ));
}
