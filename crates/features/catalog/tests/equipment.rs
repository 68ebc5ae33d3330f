use mfx_catalog::{CatalogError, EquipmentTabs, equipment, find};
use std::collections::HashSet;

#[test]
fn catalog_ids_are_unique_and_complete() {
    let ids: Vec<_> = equipment().iter().map(|c| c.id).collect();
    let unique: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(ids.len(), 7);
    assert_eq!(unique.len(), ids.len(), "duplicate category id");
    assert_eq!(
        ids,
        ["sparkular", "flame", "co2", "smoke-bubble", "stadium-shot", "laser", "low-fog"]
    );
}

#[test]
fn every_category_is_displayable() {
    for category in equipment() {
        assert!(!category.title.is_empty(), "{} has no title", category.id);
        assert!(!category.specs.is_empty(), "{} has no specs", category.id);
        assert!(category.image.starts_with("/images/"), "{} image path", category.id);
    }
}

#[test]
fn find_returns_matching_record() {
    let flame = find("flame").expect("flame exists");
    assert_eq!(flame.title, "Flame Machines");
    assert_eq!(flame.specs, ["Chama Real", "Controle DMX 512", "Sistemas de Segurança Anti-Tombamento"]);
    assert!(find("fireworks").is_none());
}

#[test]
fn tabs_start_on_first_category() {
    let tabs = EquipmentTabs::new();
    assert_eq!(tabs.active().id, "sparkular");
    assert!(tabs.is_active("sparkular"));
    assert!(!tabs.is_active("flame"));
}

#[test]
fn selecting_switches_only_the_active_record() {
    let before: Vec<_> = equipment().to_vec();

    let mut tabs = EquipmentTabs::new();
    let shown = tabs.select("co2").expect("co2 exists");
    assert_eq!(shown.title, "Jatos de CO² & Fumaça");
    assert_eq!(tabs.active(), shown);

    tabs.select("low-fog").expect("low-fog exists");
    assert_eq!(tabs.active().label, "Gelo Seco");

    assert_eq!(equipment(), before.as_slice(), "catalog data must stay untouched");
}

#[test]
fn unknown_selection_keeps_current_tab() {
    let mut tabs = EquipmentTabs::new();
    tabs.select("laser").expect("laser exists");

    let err = tabs.select("confetti").expect_err("unknown id");
    assert_eq!(err, CatalogError::UnknownCategory { id: "confetti".to_owned() });
    assert!(tabs.is_active("laser"));
}
