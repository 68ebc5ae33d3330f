mod fixtures;

use fixtures::valid_draft;
use mfx_contact::{ContactError, ContactField, ContactForm, ErrorKind};
use mfx_domain::config::SiteConfig;
use strum::IntoEnumIterator;

fn filled_form(name: &str, event_type: &str) -> ContactForm {
    let draft = valid_draft();
    let mut form = ContactForm::new();
    for field in ContactField::iter() {
        form.set(field, draft.get(field));
    }
    form.set(ContactField::Name, name);
    form.set(ContactField::EventType, event_type);
    form
}

#[test]
fn accepted_submit_returns_request_and_resets() {
    let site = SiteConfig::default();
    let mut form = filled_form("Ana Souza", "Casamento");

    let request = form.submit(&site).expect("valid submission");
    assert!(request.url.starts_with("https://wa.me/556392154511?text="));
    assert!(request.message.contains("*Nome:* Ana Souza"));
    assert!(form.draft().is_blank(), "form must be cleared after submit");
    assert!(form.errors().is_empty());
}

#[test]
fn successive_submits_never_mix_values() {
    let site = SiteConfig::default();
    let mut form = filled_form("Ana Souza", "Casamento");
    let first = form.submit(&site).expect("first submission");

    form.set(ContactField::Name, "Bruno Lima");
    form.set(ContactField::City, "Gurupi");
    form.set(ContactField::State, "TO");
    form.set(ContactField::EventType, "Festival");
    form.set(ContactField::Description, "Palco principal com chamas");
    let second = form.submit(&site).expect("second submission");

    assert!(first.message.contains("Ana Souza"));
    assert!(!second.message.contains("Ana Souza"));
    assert!(!second.message.contains("Casamento"));
    assert!(!second.message.contains("07/03/2025"), "date from the first submit leaked");
    assert!(second.message.contains("*Data Prevista:* Não definida"));
    assert!(second.message.contains("*Cidade e Estado do Evento:* Gurupi/TO"));
}

#[test]
fn rejected_submit_keeps_values_and_records_errors() {
    let site = SiteConfig::default();
    let mut form = filled_form("A", "Show");

    let err = form.submit(&site).expect_err("name too short");
    let ContactError::Validation { errors } = err else {
        panic!("expected a validation error");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(form.errors(), &errors);
    assert_eq!(form.value(ContactField::Name), "A");
    assert_eq!(
        form.errors().get(ContactField::Name).map(|e| e.kind),
        Some(ErrorKind::TooShort { min: 2 })
    );
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let site = SiteConfig::default();
    let mut form = ContactForm::new();
    let _ = form.submit(&site).expect_err("empty form");
    assert_eq!(form.errors().len(), 5);

    form.set(ContactField::Name, "Ana");
    assert!(form.errors().get(ContactField::Name).is_none());
    assert_eq!(form.errors().len(), 4);
}

#[test]
fn broken_endpoint_keeps_the_draft() {
    let mut site = SiteConfig::default();
    site.messaging.recipient = String::new();
    let mut form = filled_form("Ana Souza", "Casamento");

    let err = form.submit(&site).expect_err("no recipient");
    assert!(matches!(err, ContactError::Endpoint { .. }));
    assert_eq!(form.value(ContactField::Name), "Ana Souza");
}

#[test]
fn reset_clears_everything() {
    let mut form = filled_form("Ana Souza", "Casamento");
    form.reset();
    assert_eq!(form, ContactForm::default());
}

#[test]
fn brand_name_comes_from_config() {
    let mut site = SiteConfig::default();
    site.brand.name = "Acme FX".to_owned();
    let mut form = filled_form("Ana Souza", "Casamento");

    let request = form.submit(&site).expect("valid");
    assert!(request.message.starts_with("*Olá, equipe Acme FX!*"));
}
