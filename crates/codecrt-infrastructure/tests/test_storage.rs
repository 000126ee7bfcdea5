use codecrt_core::{CodecrtError, Era};
use codecrt_core::config::DEFAULT_EXECUTION_URL;
use codecrt_infrastructure::ExportWriter;
use codecrt_infrastructure::storage::{ConfigStorage, SecretStorage};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_and_secret_side_by_side() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let secret_path = temp_dir.path().join("secret.json");

    fs::write(
        &config_path,
        r#"
[completion]
model = "anthropic/claude-3.5-haiku"

[terminal]
start_mode = "1985"
history_file = "/tmp/codecrt-history.txt"
"#,
    )
    .unwrap();
    fs::write(
        &secret_path,
        r#"{ "openrouter": { "api_key": "sk-or-test", "model_name": "openai/gpt-4o-mini" } }"#,
    )
    .unwrap();

    let config = ConfigStorage::with_path(config_path).load().unwrap();
    assert_eq!(config.completion.model, "anthropic/claude-3.5-haiku");
    assert_eq!(config.execution.base_url, DEFAULT_EXECUTION_URL);
    assert_eq!(config.terminal.start_mode, Era::Era1985);
    assert_eq!(
        config.terminal.history_file.as_deref(),
        Some("/tmp/codecrt-history.txt")
    );

    let secret = SecretStorage::with_path(secret_path).openrouter().unwrap();
    assert_eq!(secret.api_key, "sk-or-test");
    assert_eq!(secret.model_name.as_deref(), Some("openai/gpt-4o-mini"));
}

#[test]
fn test_unknown_start_mode_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[terminal]\nstart_mode = \"1999\"\n").unwrap();

    let err = ConfigStorage::with_path(config_path).load().unwrap_err();
    assert!(matches!(err, CodecrtError::Serialization { .. }));
}

#[test]
fn test_export_round_trip_into_nested_dir() {
    let temp_dir = TempDir::new().unwrap();
    let writer = ExportWriter::new(temp_dir.path().join("exports").join("today"));

    let path = writer
        .write("codecrt_2025-06-01T12-00-00.c", "int main() { return 0; }")
        .unwrap();

    assert_eq!(path.file_name().unwrap(), "codecrt_2025-06-01T12-00-00.c");
    assert_eq!(fs::read_to_string(path).unwrap(), "int main() { return 0; }");
}
