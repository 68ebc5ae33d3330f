use crate::validation::ValidationErrors;

/// A specialized [`ContactError`] enum of this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// One or more fields failed validation; the form keeps its values.
    #[error("Contact form rejected: {errors}")]
    Validation { errors: ValidationErrors },

    /// The configured messaging endpoint cannot produce a valid link.
    #[error("Invalid messaging endpoint: {message}")]
    Endpoint { message: String },
}

impl From<ValidationErrors> for ContactError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation { errors }
    }
}
