use dirtally::config::Config;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn parse_complete_config_file() {
    let config_content = r#"
[analyze]
ignore = ["/var/cache", "node_modules"]
local_root = true
absolute_ignore = true
show_errors = true
reverse = true
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(
        config.analyze.ignore,
        vec!["/var/cache".to_string(), "node_modules".to_string()]
    );
    assert!(config.analyze.local_root);
    assert!(config.analyze.absolute_ignore);
    assert!(config.analyze.show_errors);
    assert!(config.analyze.reverse);
}

#[test]
fn parse_partial_config_uses_defaults() {
    let config_content = r#"
[analyze]
reverse = true
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    // Explicit value
    assert!(config.analyze.reverse);
    // Default values
    assert!(config.analyze.ignore.is_empty());
    assert!(!config.analyze.absolute_ignore);
}

#[test]
fn parse_empty_config_uses_defaults() {
    let file = NamedTempFile::new().unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    assert!(!config.analyze.reverse);
    assert!(!config.analyze.show_errors);
}

#[test]
fn parse_invalid_toml_returns_error() {
    let config_content = "this is not valid toml [[[";

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let result = Config::load(Some(file.path()));
    assert!(result.is_err());
}

#[test]
fn parse_empty_ignore_entry_returns_error() {
    let config_content = r#"
[analyze]
ignore = ["/tmp", ""]
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let result = Config::load(Some(file.path()));
    assert!(result.is_err());
}

#[test]
fn missing_explicit_config_returns_error() {
    let result = Config::load(Some(std::path::Path::new("/nonexistent/dirtally.toml")));
    assert!(result.is_err());
}
