use mfx_domain::constants::{FOOTER_NAV, HEADER_NAV, SECTION_CONTACT, SECTION_HOME};

#[test]
fn nav_entries_point_at_sections() {
    assert_eq!(HEADER_NAV.first().map(|item| item.anchor), Some(SECTION_HOME));
    assert_eq!(HEADER_NAV.last().map(|item| item.anchor), Some(SECTION_CONTACT));
    assert_eq!(HEADER_NAV[0].href(), "#inicio");
}

#[test]
fn header_and_footer_cover_the_same_sections() {
    let mut header: Vec<_> = HEADER_NAV.iter().map(|item| item.anchor).collect();
    let mut footer: Vec<_> = FOOTER_NAV.iter().map(|item| item.anchor).collect();
    header.sort_unstable();
    footer.sort_unstable();
    assert_eq!(header, footer);
}
