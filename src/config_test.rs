use super::*;

// =============================================================
// Embedded target
// =============================================================

#[test]
fn embedded_target_parses() {
    let config = TargetConfig::embedded().unwrap();
    assert!(config.compile);
    assert_eq!(config.app_theme.project_gallery(), Some("projects"));
    assert_eq!(config.app_theme.example_gallery(), Some("examples"));
}

#[test]
fn load_matches_embedded_target() {
    assert_eq!(TargetConfig::load(), TargetConfig::embedded().unwrap());
}

// =============================================================
// from_json
// =============================================================

#[test]
fn from_json_defaults_optional_fields() {
    let config = TargetConfig::from_json(r#"{ "id": "arcade", "name": "Arcade" }"#).unwrap();
    assert!(!config.compile);
    assert_eq!(config.app_theme, AppTheme::default());
    assert_eq!(config.script_id_parser().unwrap().parse("abcdefghij"), None);
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = TargetConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn share_domains_feed_script_id_parser() {
    let config = TargetConfig::from_json(
        r#"{ "id": "t", "name": "T", "appTheme": { "shareDomains": ["makecode.com"] } }"#,
    )
    .unwrap();
    let parser = config.script_id_parser().unwrap();
    assert_eq!(parser.parse("makecode.com/abcdefghij").as_deref(), Some("abcdefghij"));
}

// =============================================================
// AppTheme
// =============================================================

#[test]
fn blank_gallery_ids_count_as_unset() {
    let theme = AppTheme {
        project_gallery: Some("  ".to_owned()),
        example_gallery: Some(String::new()),
        share_domains: Vec::new(),
    };
    assert_eq!(theme.project_gallery(), None);
    assert_eq!(theme.example_gallery(), None);
}
