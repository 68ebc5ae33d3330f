use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Named inputs of the quote request form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ContactField {
    Name,
    City,
    State,
    EventType,
    Date,
    Phone,
    Email,
    Description,
}

impl ContactField {
    /// Form label shown above the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome completo",
            Self::City => "Cidade do evento",
            Self::State => "Estado",
            Self::EventType => "Tipo de evento",
            Self::Date => "Data (se já tiver)",
            Self::Phone => "Telefone (opcional)",
            Self::Email => "E-mail (opcional)",
            Self::Description => "Descrição",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Como devemos te chamar?",
            Self::City => "Cidade",
            Self::State => "UF",
            Self::EventType => "Show, casamento, festival...",
            Self::Date => "",
            Self::Phone => "(63) 99999-9999",
            Self::Email => "voce@exemplo.com",
            Self::Description => "Público estimado, local, estrutura de palco, tipo de atração...",
        }
    }
}

/// Raw, unvalidated form values as typed by the visitor.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactDraft {
    pub name: String,
    pub city: String,
    pub state: String,
    pub event_type: String,
    /// `YYYY-MM-DD` as produced by a date input, or empty.
    pub date: String,
    pub phone: String,
    pub email: String,
    pub description: String,
}

impl ContactDraft {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::City => &self.city,
            ContactField::State => &self.state,
            ContactField::EventType => &self.event_type,
            ContactField::Date => &self.date,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
            ContactField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::City => &mut self.city,
            ContactField::State => &mut self.state,
            ContactField::EventType => &mut self.event_type,
            ContactField::Date => &mut self.date,
            ContactField::Phone => &mut self.phone,
            ContactField::Email => &mut self.email,
            ContactField::Description => &mut self.description,
        };
        *slot = value.into();
    }

    /// `true` when every field is empty (freshly reset form).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}
