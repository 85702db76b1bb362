#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::selector::SampleMode;
use crate::test_utils::temp_project_with_config;

#[test]
fn defaults_are_applied() {
    let config = Config::default();

    assert_eq!(config.notebooks.dir, PathBuf::from("notebooks"));
    assert!(config.notebooks.exclude.is_empty());
    assert!(config.ignore.notebooks.is_empty());
    assert_eq!(config.ignore.sample, 3);
    assert_eq!(config.ignore.mode, SampleMode::Distinct);
    assert_eq!(config.timeout, 2800);
}

#[test]
fn full_config_parses() {
    let path = PathBuf::from("nbcull.toml");
    let content = r#"
version = 1
timeout = 600

[notebooks]
dir = "docs/notebooks"
exclude = ["drafts/**"]

[ignore]
notebooks = ["3_DC_Kaufman_finite_well", "5_FDEM_following_Augustin_Fig3"]
sample = 2
mode = "with-replacement"
"#;
    let config = parse(content, &path).unwrap();

    assert_eq!(config.version, Some(1));
    assert_eq!(config.timeout, 600);
    assert_eq!(config.notebooks.dir, PathBuf::from("docs/notebooks"));
    assert_eq!(config.notebooks.exclude, vec!["drafts/**"]);
    assert_eq!(
        config.ignore.notebooks,
        vec!["3_DC_Kaufman_finite_well", "5_FDEM_following_Augustin_Fig3"]
    );
    assert_eq!(config.ignore.sample, 2);
    assert_eq!(config.ignore.mode, SampleMode::WithReplacement);
}

#[test]
fn partial_sections_keep_defaults() {
    let path = PathBuf::from("nbcull.toml");
    let content = r#"
version = 1

[ignore]
notebooks = ["slow_one"]
"#;
    let config = parse(content, &path).unwrap();

    assert_eq!(config.ignore.notebooks, vec!["slow_one"]);
    assert_eq!(config.ignore.sample, 3);
    assert_eq!(config.timeout, 2800);
}

#[test]
fn invalid_toml_reports_the_path() {
    let path = PathBuf::from("some/nbcull.toml");
    let err = parse("version = [broken", &path).unwrap_err();

    assert!(err.to_string().contains("some/nbcull.toml"));
}

#[test]
fn resolve_prefers_explicit_path() {
    let tmp = temp_project_with_config("version = 1\ntimeout = 5\n");
    let other = tempfile::TempDir::new().unwrap();

    let explicit = tmp.path().join("nbcull.toml");
    let (config, root) = resolve(Some(&explicit), other.path()).unwrap();

    assert_eq!(config.timeout, 5);
    assert_eq!(root, tmp.path());
}

#[test]
fn resolve_falls_back_to_defaults_without_config() {
    let tmp = tempfile::TempDir::new().unwrap();
    // Stop discovery from escaping the temp dir
    std::fs::create_dir(tmp.path().join(".git")).unwrap();

    let (config, root) = resolve(None, tmp.path()).unwrap();

    assert_eq!(config.timeout, 2800);
    assert_eq!(root, tmp.path());
}

#[test]
fn resolve_discovers_config_in_cwd() {
    let tmp = temp_project_with_config("version = 1\n\n[ignore]\nsample = 0\n");

    let (config, root) = resolve(None, tmp.path()).unwrap();

    assert_eq!(config.ignore.sample, 0);
    assert_eq!(root, tmp.path());
}
