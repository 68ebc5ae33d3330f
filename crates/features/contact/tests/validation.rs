mod fixtures;

use fixtures::valid_draft;
use mfx_contact::{ContactField, ErrorKind, is_email, validate};
use strum::IntoEnumIterator;

#[test]
fn valid_draft_has_no_errors() {
    let submission = validate(&valid_draft()).expect("draft is valid");
    assert_eq!(submission.name, "Ana Souza");
    assert_eq!(submission.date.as_deref(), Some("2025-03-07"));
    assert!(submission.phone.is_none());
    assert!(submission.email.is_none());
}

#[test]
fn missing_required_field_is_reported_on_that_field_only() {
    for field in [
        ContactField::Name,
        ContactField::City,
        ContactField::State,
        ContactField::EventType,
        ContactField::Description,
    ] {
        let mut draft = valid_draft();
        draft.set(field, "");

        let errors = validate(&draft).expect_err("required field is empty");
        assert_eq!(errors.len(), 1, "only {field} should fail");
        let error = errors.get(field).expect("error attached to the field");
        assert_eq!(error.kind, ErrorKind::Missing);
    }
}

#[test]
fn whitespace_counts_as_missing() {
    let mut draft = valid_draft();
    draft.name = "   ".to_owned();
    let errors = validate(&draft).expect_err("blank name");
    assert_eq!(errors.message(ContactField::Name), Some("Nome obrigatório"));
}

#[test]
fn short_values_report_their_minimum() {
    let mut draft = valid_draft();
    draft.state = "T".to_owned();
    draft.description = "Show".to_owned();

    let errors = validate(&draft).expect_err("two short fields");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get(ContactField::State).map(|e| e.kind), Some(ErrorKind::TooShort { min: 2 }));
    assert_eq!(
        errors.get(ContactField::Description).map(|e| e.kind),
        Some(ErrorKind::TooShort { min: 5 })
    );
    assert_eq!(errors.message(ContactField::Description), Some("Descreva brevemente o evento"));
    assert!(errors.get(ContactField::Name).is_none());
}

#[test]
fn minimum_counts_characters_not_bytes() {
    let mut draft = valid_draft();
    draft.state = "Tó".to_owned();
    assert!(validate(&draft).is_ok());
}

#[test]
fn optional_fields_are_checked_only_when_given() {
    let mut draft = valid_draft();
    draft.phone = "1234".to_owned();
    draft.email = "ana@".to_owned();

    let errors = validate(&draft).expect_err("bad phone and email");
    assert_eq!(errors.get(ContactField::Phone).map(|e| e.kind), Some(ErrorKind::TooShort { min: 8 }));
    assert_eq!(errors.get(ContactField::Email).map(|e| e.kind), Some(ErrorKind::MalformedEmail));
    assert_eq!(errors.message(ContactField::Email), Some("E-mail inválido"));

    draft.phone = "(63) 99215-4511".to_owned();
    draft.email = "ana.souza@example.com.br".to_owned();
    let submission = validate(&draft).expect("optional fields now valid");
    assert_eq!(submission.email.as_deref(), Some("ana.souza@example.com.br"));
}

#[test]
fn date_is_never_rejected() {
    let mut draft = valid_draft();
    draft.date = "amanhã".to_owned();
    assert!(validate(&draft).is_ok());
}

#[test]
fn errors_follow_form_order() {
    let errors = validate(&mfx_contact::ContactDraft::default()).expect_err("empty form");
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    let expected: Vec<_> = ContactField::iter()
        .filter(|f| !matches!(f, ContactField::Date | ContactField::Phone | ContactField::Email))
        .collect();
    assert_eq!(fields, expected);
}

#[test]
fn email_shapes() {
    for ok in ["a@b.co", "first.last+tag@sub.domain.org", "o'neil@example.com"] {
        assert!(is_email(ok), "{ok} should be accepted");
    }
    for bad in ["", "plain", "@example.com", ".a@example.com", "a..b@example.com", "a@b", "a@b.c", "a b@c.com"] {
        assert!(!is_email(bad), "{bad} should be rejected");
    }
}

#[test]
fn errors_display_and_serialize() {
    let mut draft = valid_draft();
    draft.name.clear();
    let errors = validate(&draft).expect_err("missing name");

    assert_eq!(errors.to_string(), "name: Nome obrigatório");
    let json = serde_json::to_value(&errors).expect("serialize");
    assert_eq!(json, serde_json::json!([{ "field": "name", "kind": "missing" }]));
}
