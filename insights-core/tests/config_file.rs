use insights_core::{AnalyticsConfig, ConfigError, ErrorExt};
use std::env;
use std::fs;

#[test]
fn test_example_config_matches_defaults() {
    let config = AnalyticsConfig::from_toml_str(include_str!("../../config.example.toml"))
        .expect("example config must parse");
    assert_eq!(config, AnalyticsConfig::default());
}

#[test]
fn test_config_file_not_found() {
    let path = env::temp_dir().join(format!("missing_{}.toml", uuid::Uuid::new_v4()));
    let err = AnalyticsConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
    assert_eq!(err.error_code(), "CONFIG_FILE_NOT_FOUND");
}

#[test]
fn test_config_file_round_trip() {
    let path = env::temp_dir().join(format!("post_insights_{}.toml", uuid::Uuid::new_v4()));
    fs::write(
        &path,
        "[trending]\ncomment_weight = 1.0\noffset_hours = 0.0\n\n[report]\ntop_posts = 3\n",
    )
    .expect("Failed to write test config");

    let config = AnalyticsConfig::from_file(&path).expect("Failed to load test config");
    let _ = fs::remove_file(&path);

    assert_eq!(config.trending.comment_weight, 1.0);
    assert_eq!(config.trending.offset_hours, 0.0);
    assert_eq!(config.trending.gravity, 1.5);
    assert_eq!(config.report.top_posts, 3);
}
