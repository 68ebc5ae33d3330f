//! Quote request form for the contact section.
//!
//! The flow is a single synchronous sequence:
//! [`validate`] → [`compose_message`] → [`build_deep_link`], wrapped by
//! [`ContactForm::submit`] which also resets the form on success.
//!
//! ```rust
//! use mfx_contact::ContactForm;
//! use mfx_domain::config::SiteConfig;
//! use mfx_domain::contact::ContactField;
//!
//! let mut form = ContactForm::new();
//! form.set(ContactField::Name, "Ana Souza");
//! form.set(ContactField::City, "Palmas");
//! form.set(ContactField::State, "TO");
//! form.set(ContactField::EventType, "Casamento");
//! form.set(ContactField::Description, "Entrada dos noivos com faísca fria");
//!
//! let request = form.submit(&SiteConfig::default()).unwrap();
//! assert!(request.url.starts_with("https://wa.me/556392154511?text="));
//! assert!(form.draft().is_blank());
//! ```

mod date;
mod error;
mod form;
mod link;
mod message;
mod validation;

pub use crate::date::{DATE_SEPARATOR, format_event_date};
pub use crate::error::ContactError;
pub use crate::form::{ContactForm, QuoteRequest};
pub use crate::link::{TEXT_PARAM, build_deep_link};
pub use crate::message::compose_message;
pub use crate::validation::{
    ContactSubmission, ErrorKind, FieldError, ValidationErrors, is_email, validate,
};
pub use mfx_domain::contact::{ContactDraft, ContactField};
