use mfx_domain::constants::DATE_NOT_SET;

/// Separator between the `YYYY`, `MM` and `DD` parts of an HTML date input value.
pub const DATE_SEPARATOR: char = '-';

/// Reorders an event date from `YYYY-MM-DD` to `DD/MM/YYYY`.
///
/// Blank or absent input yields the "not set" placeholder. Any value with exactly three
/// dash-separated parts has them reversed as-is, without calendar checks, so the visitor's
/// digits are never rewritten. Everything else is passed through unchanged.
///
/// ```rust
/// use mfx_contact::format_event_date;
///
/// assert_eq!(format_event_date(Some("2025-03-07")), "07/03/2025");
/// assert_eq!(format_event_date(Some("25-03-07")), "07/03/25");
/// assert_eq!(format_event_date(None), "Não definida");
/// ```
#[must_use]
pub fn format_event_date(raw: Option<&str>) -> String {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return DATE_NOT_SET.to_owned();
    };

    match value.split(DATE_SEPARATOR).collect::<Vec<_>>().as_slice() {
        [year, month, day] => format!("{day}/{month}/{year}"),
        _ => value.to_owned(),
    }
}
