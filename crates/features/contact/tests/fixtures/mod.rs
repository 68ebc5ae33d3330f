use mfx_contact::ContactDraft;

/// A draft that passes every rule.
pub fn valid_draft() -> ContactDraft {
    ContactDraft {
        name: "Ana Souza".to_owned(),
        city: "Palmas".to_owned(),
        state: "TO".to_owned(),
        event_type: "Casamento".to_owned(),
        date: "2025-03-07".to_owned(),
        phone: String::new(),
        email: String::new(),
        description: "Entrada dos noivos com faísca fria e gelo seco na valsa.".to_owned(),
    }
}
