use testquip::config::Config;

#[test]
fn test_default_config_values() {
    let config = Config::default();

    assert_eq!(config.log.file, "logs/info.log");
    assert_eq!(config.log.level, "info");
    assert!(config.console.color);
}

#[test]
fn test_load_from_file() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(".testquiprc.toml");
    std::fs::write(
        &path,
        "[log]\nfile = \"out/test.log\"\n\n[console]\ncolor = false\n",
    )
    .expect("Failed to write config file");

    let config = Config::load_from_file(&path).expect("Failed to load config");

    assert_eq!(config.log.file, "out/test.log");
    assert_eq!(config.log.level, "info");
    assert!(!config.console.color);
}

#[test]
fn test_load_from_missing_file_is_none() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nope.toml");

    assert!(Config::load_from_file(&path).is_none());
}

#[test]
fn test_invalid_toml_is_none() {
    assert!(Config::parse("log = {").is_none());
}
