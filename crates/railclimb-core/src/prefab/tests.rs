//! Tests for the prefab catalog.

use super::*;
use crate::error::RailclimbError;
use crate::stock::{Calculative, RollingStock};

#[test]
fn test_solo_locomotive() {
    let climax = CLIMAX.build();
    assert_eq!(climax.name(), "Climax");
    assert_eq!(climax.mass(), 55678.0);
    assert_eq!(climax.tractive_effort(), 17486.0);
    assert!(climax.as_group().is_none());
}

#[test]
fn test_tendered_locomotive_is_group() {
    let mogul = MOGUL.named("No. 3");
    let group = mogul.as_group().expect("tendered locomotive should be a group");
    assert_eq!(group.name(), "No. 3");
    assert_eq!(group.train().names(), vec!["No. 3", "No. 3 (Tender)"]);
    assert_eq!(mogul.mass(), 103300.0);
    assert_eq!(mogul.tractive_effort(), 12063.0);
}

#[test]
fn test_full_load() {
    let car = HOPPER
        .load(CargoLoad::full(Cargo::IronOre), Difficulty::Realistic)
        .unwrap();
    assert_eq!(car.name(), "Hopper (Iron Ore x10)");
    assert_eq!(car.mass(), 13200.0 + 22050.0);
}

#[test]
fn test_difficulty_scales_cargo_only() {
    let load = CargoLoad::of(Cargo::Logs, 4);
    let casual = FLATCAR_ROUND.load(load, Difficulty::Casual).unwrap();
    let medium = FLATCAR_ROUND.load(load, Difficulty::Medium).unwrap();
    assert_eq!(casual.mass(), 8360.0);
    assert_eq!(medium.mass(), 8360.0 + 2.0 * 4409.0);
}

#[test]
fn test_explicit_name_is_kept() {
    let car = BOXCAR
        .build_with(Some("Tool Car"), Some(CargoLoad::of(Cargo::Tools, 10)), Difficulty::Hard)
        .unwrap();
    assert_eq!(car.name(), "Tool Car");
    assert_eq!(car.mass(), 17463.0 + 10.0 * 220.0 * 0.75);
}

#[test]
fn test_cargo_limit() {
    let err = TANKER
        .load(CargoLoad::of(Cargo::CrudeOil, 13), Difficulty::Realistic)
        .unwrap_err();
    assert_eq!(
        err,
        RailclimbError::CargoLimit {
            cargo: "Crude Oil".to_string(),
            quantity: 13,
            limit: 12,
        }
    );
}

#[test]
fn test_unpermitted_cargo() {
    assert_eq!(CABOOSE.limit(Cargo::Coal), 0);
    assert!(CABOOSE
        .load(CargoLoad::of(Cargo::Coal, 1), Difficulty::Realistic)
        .is_err());
}

#[test]
fn test_scaled_load() {
    assert_eq!(CargoLoad::full(Cargo::Rails).scaled(3).quantity, Some(3));
    assert_eq!(CargoLoad::of(Cargo::Rails, 2).scaled(3).quantity, Some(6));
}

#[test]
fn test_scaled_load_saturates() {
    let load = CargoLoad::of(Cargo::Coal, u32::MAX / 2 + 1).scaled(2);
    assert_eq!(load.quantity, Some(u32::MAX));
    assert_eq!(
        HOPPER.load(load, Difficulty::Realistic),
        Err(RailclimbError::CargoLimit {
            cargo: "Coal".to_string(),
            quantity: u32::MAX,
            limit: 10,
        })
    );
}

#[test]
fn test_lookup() {
    assert_eq!(locomotive("heisler"), Some(&HEISLER));
    assert_eq!(car("caboose"), Some(&CABOOSE));
    assert!(locomotive("hopper").is_none());
    assert_eq!(cargo("raw_iron").unwrap(), Cargo::RawIron);
    assert_eq!(
        cargo("gold"),
        Err(RailclimbError::UnknownCargo("gold".to_string()))
    );
}

#[test]
fn test_catalog_keys_are_unique() {
    let mut keys: Vec<&str> = LOCOMOTIVES
        .iter()
        .map(|(k, _)| *k)
        .chain(CARS.iter().map(|(k, _)| *k))
        .collect();
    let total = keys.len();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), total);
}

#[test]
fn test_every_locomotive_climbs_level_track() {
    for (key, template) in LOCOMOTIVES {
        let loco: RollingStock = template.build();
        assert!(loco.can_climb(0.0, 1.0), "{key}");
    }
}
