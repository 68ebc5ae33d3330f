use mfx_domain::config::{BrandConfig, MessagingConfig, SiteConfig, SocialConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let brand = BrandConfig::default();
    assert_eq!(brand.name, "MaguilaFX");

    let messaging = MessagingConfig::default();
    assert_eq!(messaging.base_url, "https://wa.me");
    assert_eq!(messaging.recipient, "556392154511");

    let social = SocialConfig::default();
    assert!(social.instagram.ends_with("/maguilafx"));
}

#[test]
fn site_config_deserializes_partial_input() {
    let raw = json!({
        "messaging": { "recipient": "5511999990000" },
        "brand": { "name": "Acme FX" }
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.messaging.recipient, "5511999990000");
    assert_eq!(cfg.messaging.base_url, "https://wa.me", "missing keys fall back to defaults");
    assert_eq!(cfg.brand.name, "Acme FX");
    assert_eq!(cfg.social, SocialConfig::default());
}

#[test]
fn site_config_clone_on_write() {
    let original = SiteConfig::default();
    let mut edited = original.clone();
    edited.brand.name = "Other".to_owned();

    assert_eq!(original.brand.name, "MaguilaFX");
    assert_eq!(edited.brand.name, "Other");
}
