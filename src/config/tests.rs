use super::*;

fn parse(toml_str: &str) -> FileConfig {
    toml::from_str(toml_str).expect("test TOML should parse")
}

#[test]
fn empty_file_resolves_to_defaults() {
    let config = Config::resolve(FileConfig::default());
    let defaults = Config::default();
    assert_eq!(config.theme, defaults.theme);
    assert_eq!(config.events_page_size, 8);
    assert_eq!(config.departments_page_size, 4);
    assert_eq!(config.admin_page_size, 5);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn file_values_override_defaults() {
    let file = parse(
        r#"
        theme = "Campus Light"
        submit_latency_ms = 50
        events_page_size = 12

        [logging]
        level = "debug"
        file_enabled = true
        file_rotation = "hourly"
        "#,
    );
    let config = Config::resolve(file);
    assert_eq!(config.theme, "Campus Light");
    assert_eq!(config.submit_latency_ms, 50);
    assert_eq!(config.events_page_size, 12);
    assert!(config.logging.file_enabled);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file_rotation, LogRotation::Hourly);
}

#[test]
fn zero_page_size_is_ignored() {
    let file = parse("events_page_size = 0");
    let config = Config::resolve(file);
    assert_eq!(config.events_page_size, 8);
}

#[test]
fn unknown_rotation_falls_back_to_default() {
    let file = parse(
        r#"
        [logging]
        file_rotation = "weekly"
        "#,
    );
    let config = Config::resolve(file);
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn template_round_trips_through_the_parser() {
    let template = Config::default().to_toml();
    let file: FileConfig = toml::from_str(&template).expect("template should be valid TOML");
    let config = Config::resolve(file);
    assert_eq!(config.theme, Config::default().theme);
    assert_eq!(config.submit_latency_ms, Config::default().submit_latency_ms);
}
