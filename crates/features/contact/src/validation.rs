use mfx_domain::contact::{ContactDraft, ContactField};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;
use strum::IntoEnumIterator;
use tracing::debug;

// Lookarounds are not supported by `regex`; the dot rules are checked in `is_email`.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ErrorKind {
    /// Required field left empty (or only whitespace).
    Missing,
    /// Fewer characters than the field's minimum.
    TooShort { min: usize },
    /// Does not look like an e-mail address.
    MalformedEmail,
}

/// A validation failure attached to one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldError {
    pub field: ContactField,
    #[serde(flatten)]
    pub kind: ErrorKind,
}

impl FieldError {
    /// Inline message rendered next to the field.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match (self.kind, self.field) {
            (ErrorKind::Missing, ContactField::Name) => "Nome obrigatório",
            (ErrorKind::Missing, ContactField::City) => "Cidade obrigatória",
            (ErrorKind::Missing, ContactField::State) => "Estado obrigatório",
            (ErrorKind::Missing, ContactField::EventType) => "Informe o tipo de evento",
            (ErrorKind::Missing, ContactField::Description) => "Conte um pouco sobre o evento",
            (ErrorKind::Missing, _) => "Campo obrigatório",
            (ErrorKind::TooShort { .. }, ContactField::Name) => "Nome muito curto",
            (ErrorKind::TooShort { .. }, ContactField::City) => "Cidade muito curta",
            (ErrorKind::TooShort { .. }, ContactField::State) => "Estado muito curto",
            (ErrorKind::TooShort { .. }, ContactField::EventType) => "Tipo de evento muito curto",
            (ErrorKind::TooShort { .. }, ContactField::Description) => {
                "Descreva brevemente o evento"
            },
            (ErrorKind::TooShort { .. }, ContactField::Phone) => "Informe um telefone válido",
            (ErrorKind::TooShort { .. }, _) => "Valor muito curto",
            (ErrorKind::MalformedEmail, _) => "E-mail inválido",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

/// Per-field errors of a rejected submission, in form order. At most one error per field.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// The error attached to `field`, if any.
    #[must_use]
    pub fn get(&self, field: ContactField) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    /// Shortcut for the inline message of `field`.
    #[must_use]
    pub fn message(&self, field: ContactField) -> Option<&'static str> {
        self.get(field).map(FieldError::message)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Drops the error of a single field, e.g. once the visitor edits it.
    pub fn clear(&mut self, field: ContactField) {
        self.0.retain(|e| e.field != field);
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// A draft that passed validation. Values are trimmed; optional fields are `None` when blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub city: String,
    pub state: String,
    pub event_type: String,
    pub date: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Required { min: usize },
    OptionalMin { min: usize },
    OptionalEmail,
    Optional,
}

const fn rule(field: ContactField) -> Rule {
    match field {
        ContactField::Name
        | ContactField::City
        | ContactField::State
        | ContactField::EventType => Rule::Required { min: 2 },
        ContactField::Description => Rule::Required { min: 5 },
        ContactField::Phone => Rule::OptionalMin { min: 8 },
        ContactField::Email => Rule::OptionalEmail,
        ContactField::Date => Rule::Optional,
    }
}

fn check(field: ContactField, raw: &str) -> Option<ErrorKind> {
    let value = raw.trim();
    if value.is_empty() {
        return matches!(rule(field), Rule::Required { .. }).then_some(ErrorKind::Missing);
    }

    match rule(field) {
        Rule::Required { min } | Rule::OptionalMin { min } if value.chars().count() < min => {
            Some(ErrorKind::TooShort { min })
        },
        Rule::OptionalEmail if !is_email(value) => Some(ErrorKind::MalformedEmail),
        _ => None,
    }
}

/// Checks the usual `local@domain.tld` shape.
#[must_use]
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL.is_match(value)
}

/// Validates every field independently.
///
/// # Errors
/// Returns all field errors at once; a submission is either fully accepted or rejected.
pub fn validate(draft: &ContactDraft) -> Result<ContactSubmission, ValidationErrors> {
    let errors: Vec<FieldError> = ContactField::iter()
        .filter_map(|field| check(field, draft.get(field)).map(|kind| FieldError { field, kind }))
        .collect();

    if !errors.is_empty() {
        debug!(rejected = errors.len(), "Contact form failed validation");
        return Err(ValidationErrors(errors));
    }

    Ok(ContactSubmission {
        name: draft.name.trim().to_owned(),
        city: draft.city.trim().to_owned(),
        state: draft.state.trim().to_owned(),
        event_type: draft.event_type.trim().to_owned(),
        date: optional(&draft.date),
        phone: optional(&draft.phone),
        email: optional(&draft.email),
        description: draft.description.trim().to_owned(),
    })
}

fn optional(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_owned())
}
