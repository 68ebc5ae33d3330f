//! Section anchors and navigation entries.

pub const SECTION_HOME: &str = "inicio";
pub const SECTION_ABOUT: &str = "sobre";
pub const SECTION_EQUIPMENT: &str = "equipamentos";
pub const SECTION_PORTFOLIO: &str = "portfolio";
pub const SECTION_CONTACT: &str = "contato";

/// Placeholder used in the outbound message when no event date was given.
pub const DATE_NOT_SET: &str = "Não definida";

/// A single in-page navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavItem {
    /// Fragment link for the entry, e.g. `#contato`.
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Header navigation, in display order.
pub const HEADER_NAV: &[NavItem] = &[
    NavItem { label: "Início", anchor: SECTION_HOME },
    NavItem { label: "Sobre", anchor: SECTION_ABOUT },
    NavItem { label: "Equipamentos", anchor: SECTION_EQUIPMENT },
    NavItem { label: "Portfólio", anchor: SECTION_PORTFOLIO },
    NavItem { label: "Contato", anchor: SECTION_CONTACT },
];

/// Footer navigation follows page order rather than header order.
pub const FOOTER_NAV: &[NavItem] = &[
    NavItem { label: "Início", anchor: SECTION_HOME },
    NavItem { label: "Equipamentos", anchor: SECTION_EQUIPMENT },
    NavItem { label: "Portfólio", anchor: SECTION_PORTFOLIO },
    NavItem { label: "Sobre", anchor: SECTION_ABOUT },
    NavItem { label: "Contato", anchor: SECTION_CONTACT },
];
