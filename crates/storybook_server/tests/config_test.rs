use std::io::Write;
use storybook_server::ServerConfig;

#[test]
fn test_defaults() {
    let config = ServerConfig::default();
    assert_eq!(config.host(), "127.0.0.1");
    assert_eq!(*config.port(), 3000);
    assert_eq!(config.model(), "gpt-4");
    assert!(!*config.reject_empty_entries());
    assert_eq!(config.bind_address(), "127.0.0.1:3000");
}

#[test]
fn test_bundled_defaults_match_default_impl() -> anyhow::Result<()> {
    assert_eq!(ServerConfig::from_toml_str("")?, ServerConfig::default());
    Ok(())
}

#[test]
fn test_toml_overrides_defaults() -> anyhow::Result<()> {
    let config = ServerConfig::from_toml_str(
        r#"
        host = "0.0.0.0"
        reject_empty_entries = true
        "#,
    )?;
    assert_eq!(config.host(), "0.0.0.0");
    assert_eq!(*config.port(), 3000);
    assert!(*config.reject_empty_entries());
    Ok(())
}

#[test]
fn test_wrong_type_is_error() {
    assert!(ServerConfig::from_toml_str(r#"port = "not a port""#).is_err());
}

#[test]
fn test_file_then_environment() -> anyhow::Result<()> {
    let dir = std::env::temp_dir().join(format!("storybook-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("custom.toml");
    let mut file = std::fs::File::create(&path)?;
    writeln!(file, "port = 4000")?;
    writeln!(file, r#"model = "gpt-4o""#)?;

    let env = vec![("STORYBOOK_PORT".to_string(), "5000".to_string())];
    let config = ServerConfig::load_with_env(Some(&path), Some(env))?;

    assert_eq!(*config.port(), 5000);
    assert_eq!(config.model(), "gpt-4o");

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_missing_explicit_file_is_error() {
    let path = std::path::Path::new("/nonexistent/storybook/custom.toml");
    assert!(ServerConfig::load_with_env(Some(path), Some(Vec::new())).is_err());
}

#[test]
fn test_cli_overrides() {
    let config = ServerConfig::default().with_host("0.0.0.0").with_port(8080);
    assert_eq!(config.bind_address(), "0.0.0.0:8080");
}
