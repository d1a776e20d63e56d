//! Tests for configuration loading.

use std::io::Write;
use timetravel_tui::{Cli, TuiConfig};

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_from_file_reads_values() {
    let file = config_file(
        r#"
board_side = 4
highlight_winning_line = false
log_filter = "debug"
"#,
    );
    let config = TuiConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.board_side(), 4);
    assert!(!*config.highlight_winning_line());
    assert!(*config.show_positions());
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let cli = Cli {
        config: Some("does/not/exist.toml".into()),
        ..Cli::default()
    };
    let err = TuiConfig::load(&cli).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_cli_overrides_file() {
    let file = config_file("board_side = 4\nshow_positions = true\n");
    let cli = Cli {
        config: Some(file.path().to_path_buf()),
        size: Some(5),
        hide_positions: true,
        ..Cli::default()
    };
    let config = TuiConfig::load(&cli).expect("valid config");
    assert_eq!(*config.board_side(), 5);
    assert!(!*config.show_positions());
}

#[test]
fn test_cli_size_out_of_range() {
    let file = config_file("");
    let cli = Cli {
        config: Some(file.path().to_path_buf()),
        size: Some(2),
        ..Cli::default()
    };
    assert!(TuiConfig::load(&cli).is_err());
}
