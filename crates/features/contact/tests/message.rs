mod fixtures;

use fixtures::valid_draft;
use mfx_contact::{compose_message, format_event_date, validate};

#[test]
fn date_is_reformatted_for_display() {
    assert_eq!(format_event_date(Some("2025-03-07")), "07/03/2025");
    assert_eq!(format_event_date(Some(" 2024-12-31 ")), "31/12/2024");
}

#[test]
fn absent_date_uses_placeholder() {
    assert_eq!(format_event_date(None), "Não definida");
    assert_eq!(format_event_date(Some("")), "Não definida");
    assert_eq!(format_event_date(Some("   ")), "Não definida");
}

#[test]
fn three_part_dates_are_reordered_without_rewriting_digits() {
    assert_eq!(format_event_date(Some("25-03-07")), "07/03/25");
    assert_eq!(format_event_date(Some("2025-3-7")), "7/3/2025");
    assert_eq!(format_event_date(Some("2025-02-30")), "30/02/2025");
}

#[test]
fn other_shapes_pass_through() {
    assert_eq!(format_event_date(Some("fim de março")), "fim de março");
    assert_eq!(format_event_date(Some("2025-03")), "2025-03");
    assert_eq!(format_event_date(Some("07/03/2025")), "07/03/2025");
    assert_eq!(format_event_date(Some("2025-03-07-10")), "2025-03-07-10");
}

#[test]
fn message_places_each_value_under_its_label() {
    let submission = validate(&valid_draft()).expect("valid");
    let message = compose_message(&submission, "MaguilaFX");

    assert!(message.starts_with("*Olá, equipe MaguilaFX!* 👋\n\n"));
    assert!(message.contains("*Nome:* Ana Souza\n"));
    assert!(message.contains("*Cidade e Estado do Evento:* Palmas/TO\n"));
    assert!(message.contains("*Tipo de Evento:* Casamento\n"));
    assert!(message.contains("*Data Prevista:* 07/03/2025\n"));
    assert!(message.ends_with(
        "\n*Descrição do Evento:*\nEntrada dos noivos com faísca fria e gelo seco na valsa."
    ));
    assert_eq!(message.matches("Ana Souza").count(), 1);
    assert_eq!(message.matches("Casamento").count(), 1);
    assert!(!message.contains("*Telefone:*"));
    assert!(!message.contains("*E-mail:*"));
}

#[test]
fn optional_contact_lines_appear_when_given() {
    let mut draft = valid_draft();
    draft.date.clear();
    draft.phone = "63992154511".to_owned();
    draft.email = "ana@example.com".to_owned();
    let submission = validate(&draft).expect("valid");

    let message = compose_message(&submission, "MaguilaFX");
    assert!(message.contains("*Data Prevista:* Não definida\n"));
    assert!(message.contains("*Telefone:* 63992154511\n*E-mail:* ana@example.com\n"));
}
