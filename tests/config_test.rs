use std::fs;

use lastfm_artists::config::{self, DEFAULT_ARTISTS_LIMIT, DEFAULT_PLAYS_LIMIT};
use lastfm_artists::error::LastFmError;
use lastfm_artists::types::CliOverrides;
use tempfile::TempDir;

// Helper function to write a config file into a temp dir and return its path
fn write_config(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("config.ini");
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

// Helper function for a config path that is guaranteed not to exist
fn missing_config(dir: &TempDir) -> String {
    dir.path().join("no-such.ini").to_string_lossy().into_owned()
}

#[tokio::test]
async fn test_cli_only_applies_defaults() {
    let dir = TempDir::new().unwrap();

    let options = config::resolve(CliOverrides {
        user: Some("alice".to_string()),
        config: Some(missing_config(&dir)),
        ..Default::default()
    })
    .await
    .unwrap();

    assert_eq!(options.username, "alice");
    assert_eq!(options.plays_limit, DEFAULT_PLAYS_LIMIT);
    assert_eq!(options.artists_limit, DEFAULT_ARTISTS_LIMIT);
    assert_eq!(options.output_file, None);
}

#[tokio::test]
async fn test_cli_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, "user=bob\nplays-limit=5\n");

    let options = config::resolve(CliOverrides {
        user: Some("alice".to_string()),
        config: Some(config_path),
        ..Default::default()
    })
    .await
    .unwrap();

    // CLI wins for user, the file still fills the gap for plays-limit
    assert_eq!(options.username, "alice");
    assert_eq!(options.plays_limit, 5);
}

#[tokio::test]
async fn test_config_file_fills_missing_values() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(
        &dir,
        "user=bob\nplays-limit=5\nartists-limit=100\nfile=artists.txt\n",
    );

    let options = config::resolve(CliOverrides {
        config: Some(config_path),
        ..Default::default()
    })
    .await
    .unwrap();

    assert_eq!(options.username, "bob");
    assert_eq!(options.plays_limit, 5);
    assert_eq!(options.artists_limit, 100);
    assert_eq!(options.output_file, Some("artists.txt".to_string()));
}

#[tokio::test]
async fn test_missing_username_is_config_error() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, "plays-limit=5\n");

    let err = config::resolve(CliOverrides {
        config: Some(config_path),
        ..Default::default()
    })
    .await
    .unwrap_err();

    match err {
        LastFmError::Config(message) => assert_eq!(message, "Please specify user name"),
        other => panic!("expected configuration error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_config_file_is_not_an_error() {
    let dir = TempDir::new().unwrap();

    let options = config::resolve(CliOverrides {
        user: Some("alice".to_string()),
        config: Some(missing_config(&dir)),
        ..Default::default()
    })
    .await
    .unwrap();

    assert_eq!(options.username, "alice");
}

#[tokio::test]
async fn test_non_numeric_limit_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, "user=bob\nplays-limit=lots\n");

    let options = config::resolve(CliOverrides {
        config: Some(config_path),
        ..Default::default()
    })
    .await
    .unwrap();

    assert_eq!(options.plays_limit, DEFAULT_PLAYS_LIMIT);
}

#[tokio::test]
async fn test_section_headers_are_flattened() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, "[lastfm]\nuser = bob\n\n[output]\nfile = out.txt\n");

    let options = config::resolve(CliOverrides {
        config: Some(config_path),
        ..Default::default()
    })
    .await
    .unwrap();

    assert_eq!(options.username, "bob");
    assert_eq!(options.output_file, Some("out.txt".to_string()));
}
