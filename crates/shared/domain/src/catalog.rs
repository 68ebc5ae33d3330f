use bitflags::bitflags;
use serde::{Serialize, Serializer};

/// One entry of the effects catalog shown in the tabbed display.
///
/// Records are authored as `static` tables and are never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EquipmentCategory {
    /// Stable identifier used as the tab key.
    pub id: &'static str,
    /// Short label rendered on the tab button.
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Technical specs, in display order.
    pub specs: &'static [&'static str],
    /// Public image path.
    pub image: &'static str,
}

bitflags! {
    /// Layout hints for a portfolio card.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CardFlags: u8 {
        /// Card spans two grid columns on wide screens.
        const FEATURED = 1 << 0;
        /// Image is loaded eagerly instead of lazily.
        const PRIORITY = 1 << 1;
    }
}

impl Serialize for CardFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortfolioItem {
    pub image: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub flags: CardFlags,
}

impl PortfolioItem {
    #[must_use]
    pub const fn is_featured(&self) -> bool {
        self.flags.contains(CardFlags::FEATURED)
    }

    #[must_use]
    pub const fn is_priority(&self) -> bool {
        self.flags.contains(CardFlags::PRIORITY)
    }
}

/// Copy for the "about us" and contact introduction blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AboutContent {
    pub badge: &'static str,
    pub paragraphs: &'static [&'static str],
    pub specialties: &'static [&'static str],
    pub differentials: &'static [&'static str],
    pub image: &'static str,
    pub certification: &'static str,
    pub contact_intro: &'static str,
    pub contact_perks: &'static [&'static str],
    pub contact_note: &'static str,
}
