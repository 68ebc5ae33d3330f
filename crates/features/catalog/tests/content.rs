use mfx_catalog::{about, portfolio};

#[test]
fn portfolio_has_featured_and_regular_cards() {
    let items = portfolio();
    assert_eq!(items.len(), 6);
    assert_eq!(items.iter().filter(|item| item.is_featured()).count(), 3);
    assert!(items.iter().all(|item| item.is_priority()));
    assert!(items[0].is_featured(), "the first card leads the grid");
}

#[test]
fn about_copy_is_populated() {
    let about = about();
    assert_eq!(about.specialties.len(), 5);
    assert_eq!(about.differentials.len(), 4);
    assert_eq!(about.contact_perks.len(), 3);
    assert!(about.certification.contains("Blaster"));
}
