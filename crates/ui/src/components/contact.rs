use crate::navigation::open_in_new_context;
use dioxus::prelude::*;
use mfx::domain::config::SiteConfig;
use mfx::domain::constants::SECTION_CONTACT;
use mfx::features::catalog::about;
use mfx::features::contact::{ContactError, ContactField, ContactForm};
use tracing::error;

const ENDPOINT_FAILURE: &str =
    "Não foi possível abrir o WhatsApp agora. Tente novamente em instantes.";

/// Quote request form. A valid submission opens the messaging deep link and clears the form.
#[component]
pub(crate) fn Contact() -> Element {
    let site = use_context::<SiteConfig>();
    let content = about();
    let form = use_signal(ContactForm::new);
    let mut failure = use_signal(|| None::<&'static str>);

    let mut submit_form = form;
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match submit_form.write().submit(&site) {
            Ok(request) => {
                failure.set(None);
                open_in_new_context(&request.url);
            },
            // Field errors are already stored on the form and rendered inline.
            Err(ContactError::Validation { .. }) => failure.set(None),
            Err(e) => {
                error!("Quote request not sent: {e}");
                failure.set(Some(ENDPOINT_FAILURE));
            },
        }
    };

    rsx! {
        div { id: SECTION_CONTACT, class: "contact reveal",
            div { class: "contact-intro",
                h2 { class: "section-title",
                    "Vamos colocar "
                    span { class: "accent", "fogo" }
                    " no seu próximo evento?"
                }
                p { class: "section-lead", "{content.contact_intro}" }
                ul { class: "contact-perks",
                    for perk in content.contact_perks {
                        li { key: "{perk}", "• {perk}" }
                    }
                }
                div { class: "contact-note",
                    p { class: "note-title", "Atuação em todo o Brasil*" }
                    p { "{content.contact_note}" }
                }
            }

            div { class: "contact-card",
                h3 { "Preencha para receber contato" }
                form { class: "contact-form", "novalidate": "true", onsubmit: on_submit,
                    FormField { field: ContactField::Name, form: form }
                    div { class: "form-row",
                        FormField { field: ContactField::City, form: form }
                        FormField { field: ContactField::State, form: form }
                    }
                    div { class: "form-row",
                        FormField { field: ContactField::EventType, form: form }
                        FormField { field: ContactField::Date, form: form, kind: "date" }
                    }
                    div { class: "form-row",
                        FormField { field: ContactField::Phone, form: form, kind: "tel" }
                        FormField { field: ContactField::Email, form: form, kind: "email" }
                    }
                    FormField { field: ContactField::Description, form: form }

                    if let Some(message) = failure() {
                        p { class: "form-failure", role: "alert", "{message}" }
                    }

                    button { class: "submit", r#type: "submit", "Enviar proposta" }
                    p { class: "form-consent",
                        "Ao enviar, você autoriza contato via WhatsApp para continuidade do atendimento."
                    }
                }
            }
        }
    }
}

/// Labeled input bound to one field of the form, with its inline error.
#[component]
fn FormField(
    field: ContactField,
    form: Signal<ContactForm>,
    #[props(default = "text")] kind: &'static str,
) -> Element {
    let mut form = form;
    let id = format!("contact-{field}");
    let label = field.label();
    let placeholder = field.placeholder();
    let value = form.read().value(field).to_owned();
    let error = form.read().errors().message(field);

    rsx! {
        div { class: if error.is_some() { "form-field has-error" } else { "form-field" },
            label { r#for: "{id}", "{label}" }
            if field == ContactField::Description {
                textarea {
                    id: "{id}",
                    name: "{field}",
                    rows: "4",
                    placeholder,
                    value: "{value}",
                    oninput: move |evt| form.write().set(field, evt.value()),
                }
            } else {
                input {
                    id: "{id}",
                    name: "{field}",
                    r#type: kind,
                    placeholder,
                    value: "{value}",
                    oninput: move |evt| form.write().set(field, evt.value()),
                }
            }
            if let Some(message) = error {
                p { class: "field-error", role: "alert", "{message}" }
            }
        }
    }
}
