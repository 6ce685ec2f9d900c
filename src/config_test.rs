use super::*;

#[test]
fn defaults_use_theme_key_and_literal_classes() {
    let config = ThemeConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.marker_class(Theme::Light), "light");
    assert_eq!(config.marker_class(Theme::Dark), "dark");
    assert_eq!(config.dark_scheme_query, "(prefers-color-scheme: dark)");
    assert_eq!(config.default_theme, Theme::Light);
}

#[test]
fn builders_override_fields() {
    let config = ThemeConfig::default()
        .with_storage_key("app_theme")
        .with_classes("theme-light", "theme-dark")
        .with_dark_scheme_query("(prefers-contrast: more)")
        .with_default_theme(Theme::Dark);

    assert_eq!(config.storage_key, "app_theme");
    assert_eq!(config.marker_class(Theme::Light), "theme-light");
    assert_eq!(config.marker_class(Theme::Dark), "theme-dark");
    assert_eq!(config.dark_scheme_query, "(prefers-contrast: more)");
    assert_eq!(config.default_theme, Theme::Dark);
}

#[test]
fn deserialize_fills_missing_fields_with_defaults() {
    let config: ThemeConfig =
        serde_json::from_str(r#"{"storage_key":"ui","default_theme":"dark"}"#).unwrap();
    assert_eq!(config.storage_key, "ui");
    assert_eq!(config.default_theme, Theme::Dark);
    assert_eq!(config.light_class, "light");
    assert_eq!(config.dark_class, "dark");
}
