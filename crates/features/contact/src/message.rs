use crate::date::format_event_date;
use crate::validation::ContactSubmission;
use std::fmt::Write;

/// Renders the pre-filled quote request sent through the messaging deep link.
///
/// Bold markers (`*...*`) follow the messaging app's markup. Phone and e-mail lines are
/// only present when the visitor filled them in.
#[must_use]
pub fn compose_message(submission: &ContactSubmission, brand: &str) -> String {
    let mut message = format!(
        "*Olá, equipe {brand}!* 👋\n\n\
         Estou vindo do site e gostaria de solicitar um orçamento para um evento com efeitos especiais.\n\n\
         *Nome:* {name}\n\
         *Cidade e Estado do Evento:* {city}/{state}\n\
         *Tipo de Evento:* {event_type}\n\
         *Data Prevista:* {date}\n",
        name = submission.name,
        city = submission.city,
        state = submission.state,
        event_type = submission.event_type,
        date = format_event_date(submission.date.as_deref()),
    );

    // Writing into a `String` cannot fail.
    if let Some(phone) = &submission.phone {
        let _ = writeln!(message, "*Telefone:* {phone}");
    }
    if let Some(email) = &submission.email {
        let _ = writeln!(message, "*E-mail:* {email}");
    }

    let _ = write!(message, "\n*Descrição do Evento:*\n{}", submission.description);
    message
}
