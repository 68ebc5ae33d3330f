use crate::error::ContactError;
use crate::link::build_deep_link;
use crate::message::compose_message;
use crate::validation::{ValidationErrors, validate};
use mfx_domain::config::SiteConfig;
use mfx_domain::contact::{ContactDraft, ContactField};
use tracing::info;

/// The outcome of an accepted submission: the message and the link that carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub message: String,
    pub url: String,
}

/// State of the quote request form: the values being typed and the errors of the last attempt.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    errors: ValidationErrors,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        self.draft.get(field)
    }

    #[must_use]
    pub const fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Updates one field and clears the error previously shown for it.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.clear(field);
    }

    /// Clears every value and error.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validates the draft and, if accepted, composes the quote request and resets the form.
    ///
    /// # Errors
    /// * [`ContactError::Validation`] when any field is rejected. The draft is kept and the
    ///   errors are available through [`ContactForm::errors`].
    /// * [`ContactError::Endpoint`] when the messaging config cannot produce a link. The draft
    ///   is kept so the visitor can retry once the site is fixed.
    pub fn submit(&mut self, site: &SiteConfig) -> Result<QuoteRequest, ContactError> {
        let submission = match validate(&self.draft) {
            Ok(submission) => submission,
            Err(errors) => {
                self.errors = errors.clone();
                return Err(errors.into());
            },
        };

        let message = compose_message(&submission, &site.brand.name);
        let url = build_deep_link(&site.messaging, &message)?;

        info!(
            event_type = %submission.event_type,
            has_date = submission.date.is_some(),
            "Quote request composed"
        );

        self.reset();
        Ok(QuoteRequest { message, url })
    }
}
