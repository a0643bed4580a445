//! Tests for rolling-stock composition.

use super::*;

fn porter() -> TractiveCar {
    TractiveCar::new("Porter", 14236.0, 2916.0)
}

fn mogul() -> CarGroup {
    CarGroup::new(
        "Mogul",
        concat(
            TractiveCar::new("Mogul", 58300.0, 12063.0),
            Car::new("Mogul (Tender)", 45000.0),
        ),
    )
}

fn hopper() -> Car {
    Car::new("Hopper", 13200.0)
}

#[test]
fn test_leaf_attributes() {
    let car = hopper();
    assert_eq!(car.mass(), 13200.0);
    assert_eq!(car.tractive_effort(), 0.0);
    assert!(car.starting_power(0.05).is_nan());
    assert!(car.maximum_grade(1.0).is_nan());

    let loco = porter();
    assert_eq!(loco.tractive_effort(), 2916.0);
    assert!(loco.can_climb(0.05, 1.0));
}

#[test]
fn test_group_sums_members() {
    let group = mogul();
    assert_eq!(group.mass(), 103300.0);
    assert_eq!(group.tractive_effort(), 12063.0);
    assert_eq!(group.train().len(), 2);
}

#[test]
fn test_concat_orders() {
    let unit_unit = concat(porter(), hopper());
    assert_eq!(unit_unit.names(), vec!["Porter", "Hopper"]);

    let unit_train = concat(hopper(), unit_unit.clone());
    assert_eq!(unit_train.names(), vec!["Hopper", "Porter", "Hopper"]);

    let train_unit = concat(unit_unit.clone(), mogul());
    assert_eq!(train_unit.names(), vec!["Porter", "Hopper", "Mogul"]);

    let train_train = concat(unit_unit.clone(), train_unit.clone());
    assert_eq!(train_train.len(), 5);
    assert_eq!(train_train, unit_unit.join(&train_unit));
}

#[test]
fn test_repeat_does_not_regroup() {
    let pair = concat(porter(), hopper());
    let tripled = repeat(pair, 3);
    assert_eq!(tripled.len(), 6);
    assert_eq!(
        tripled.names(),
        vec!["Porter", "Hopper", "Porter", "Hopper", "Porter", "Hopper"]
    );
    assert!(repeat(hopper(), 0).is_empty());
}

#[test]
fn test_repeat_clones_groups() {
    let consist = concat(mogul(), hopper());
    let doubled = consist.repeat(2);
    assert_eq!(doubled.len(), 4);
    assert_eq!(doubled.get(2), consist.get(0));
    assert_eq!(doubled.flat_iter().count(), 6);
    assert_eq!(doubled.mass(), 2.0 * consist.mass());
}

#[test]
fn test_totals_are_one_level_sums() {
    let train = concat(concat(mogul(), hopper()), porter());
    assert_eq!(train.mass(), 103300.0 + 13200.0 + 14236.0);
    assert_eq!(train.tractive_effort(), 12063.0 + 2916.0);
}

#[test]
fn test_flat_iter_expands_groups() {
    let train = concat(concat(mogul(), hopper()), porter());
    let names: Vec<&str> = train.flat_iter().map(RollingStock::name).collect();
    assert_eq!(names, vec!["Mogul", "Mogul (Tender)", "Hopper", "Porter"]);

    let flat_mass: f64 = train.flat_iter().map(Calculative::mass).sum();
    let flat_effort: f64 = train.flat_iter().map(Calculative::tractive_effort).sum();
    assert_eq!(flat_mass, train.mass());
    assert_eq!(flat_effort, train.tractive_effort());
}

#[test]
fn test_flat_iter_keeps_nested_groups() {
    let double = CarGroup::new("Double", concat(mogul(), hopper()));
    let train = Train::from(double);
    let names: Vec<&str> = train.flat_iter().map(RollingStock::name).collect();
    assert_eq!(names, vec!["Mogul", "Hopper"]);
}

#[test]
fn test_tractive_and_passive_units() {
    let train = concat(concat(mogul(), hopper()), concat(porter(), hopper()));
    let tractive: Vec<&str> = train.tractive_units().map(RollingStock::name).collect();
    let passive: Vec<&str> = train.passive_units().map(RollingStock::name).collect();
    assert_eq!(tractive, vec!["Mogul", "Porter"]);
    assert_eq!(passive, vec!["Hopper", "Hopper"]);
}

#[test]
fn test_slice_and_reverse() {
    let train = concat(concat(porter(), hopper()), mogul());
    assert_eq!(train.slice(1..3).names(), vec!["Hopper", "Mogul"]);
    assert!(train.slice(2..2).is_empty());
    assert_eq!(train.reversed().names(), vec!["Mogul", "Hopper", "Porter"]);
}

#[test]
fn test_display() {
    let train = concat(porter(), hopper());
    assert_eq!(train.to_string(), "[Porter, Hopper]");
    assert_eq!(Train::empty().to_string(), "[]");
}
