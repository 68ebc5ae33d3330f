mod about;
mod contact;
mod equipment;
mod footer;
mod header;
mod hero;
mod icons;
mod portfolio;

pub(crate) use self::about::About;
pub(crate) use self::contact::Contact;
pub(crate) use self::equipment::Equipment;
pub(crate) use self::footer::Footer;
pub(crate) use self::header::Header;
pub(crate) use self::hero::Hero;
pub(crate) use self::portfolio::Portfolio;

/// Inline style that points a section at its background image.
fn background(image: &str) -> String {
    format!("--section-bg-image: url('{image}')")
}
