use super::*;
use crate::util::host::BrowserHost;
use crate::util::memory_host::MemoryHost;

fn config() -> ThemeConfig {
    ThemeConfig::default()
}

// =============================================================
// read_preference
// =============================================================

#[test]
fn stored_value_wins_over_system_preference() {
    for theme in [Theme::Light, Theme::Dark] {
        let host = MemoryHost::new()
            .with_item("theme", theme.as_str())
            .with_prefers_dark(!theme.is_dark());
        assert_eq!(read_preference(&host, &config()), theme);
    }
}

#[test]
fn system_preference_used_when_nothing_stored() {
    let dark = MemoryHost::new().with_prefers_dark(true);
    let light = MemoryHost::new().with_prefers_dark(false);
    assert_eq!(read_preference(&dark, &config()), Theme::Dark);
    assert_eq!(read_preference(&light, &config()), Theme::Light);
}

#[test]
fn malformed_stored_value_falls_through() {
    let host = MemoryHost::new()
        .with_item("theme", "true")
        .with_prefers_dark(true);
    assert_eq!(stored_preference(&host, &config()), None);
    assert_eq!(read_preference(&host, &config()), Theme::Dark);
}

#[test]
fn malformed_stored_value_is_left_in_place() {
    let host = MemoryHost::new().with_item("theme", "Dark");
    read_preference(&host, &config());
    assert_eq!(host.item("theme").as_deref(), Some("Dark"));
    assert_eq!(host.write_count(), 0);
}

#[test]
fn configured_default_used_as_last_resort() {
    let host = MemoryHost::new();
    let config = config().with_default_theme(Theme::Dark);
    assert_eq!(read_preference(&host, &config), Theme::Dark);
}

#[test]
fn custom_storage_key_is_honored() {
    let host = MemoryHost::new()
        .with_item("theme", "light")
        .with_item("app_theme", "dark");
    let config = config().with_storage_key("app_theme");
    assert_eq!(read_preference(&host, &config), Theme::Dark);
}

#[test]
fn browser_host_without_browser_resolves_default() {
    assert_eq!(read_preference(&BrowserHost, &config()), Theme::Light);
}

// =============================================================
// apply / toggle
// =============================================================

#[test]
fn apply_sets_single_marker_and_persists() {
    let host = MemoryHost::new();
    apply(&host, &config(), Theme::Dark);
    assert_eq!(host.marker_classes(), vec!["dark".to_owned()]);
    assert_eq!(host.item("theme").as_deref(), Some("dark"));

    apply(&host, &config(), Theme::Light);
    assert_eq!(host.marker_classes(), vec!["light".to_owned()]);
    assert_eq!(host.item("theme").as_deref(), Some("light"));
}

#[test]
fn apply_uses_configured_classes() {
    let host = MemoryHost::new();
    let config = config().with_classes("theme-light", "theme-dark");
    apply(&host, &config, Theme::Light);
    apply(&host, &config, Theme::Dark);
    assert_eq!(host.marker_classes(), vec!["theme-dark".to_owned()]);
}

#[test]
fn toggle_flips_and_persists() {
    let host = MemoryHost::new();
    let next = toggle(&host, &config(), Theme::Light);
    assert_eq!(next, Theme::Dark);
    assert_eq!(host.item("theme").as_deref(), Some("dark"));
}

#[test]
fn toggle_twice_restores_original() {
    let host = MemoryHost::new();
    let once = toggle(&host, &config(), Theme::Dark);
    let twice = toggle(&host, &config(), once);
    assert_eq!(twice, Theme::Dark);
    assert_eq!(host.item("theme").as_deref(), Some("dark"));
    assert_eq!(host.marker_classes(), vec!["dark".to_owned()]);
}

#[test]
fn browser_host_apply_is_noop_but_callable() {
    apply(&BrowserHost, &config(), Theme::Dark);
    apply(&BrowserHost, &config(), Theme::Light);
}
