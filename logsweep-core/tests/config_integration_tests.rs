// logsweep-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};
use test_log::test;

use logsweep_core::config::{LoggerSettings, PatternSource, MAX_TEMPLATE_LENGTH, PATTERN_SLOTS};

#[test]
fn test_load_default_patterns() {
    let settings = LoggerSettings::load_default().unwrap();
    assert_eq!(settings.patterns.len(), PATTERN_SLOTS);
    assert_eq!(settings.pattern(3), "console.log('{FN} {FP}:{LN} $$', $$);");
    assert_eq!(settings.pattern(8), "console.table($$);");
}

#[test]
fn test_load_from_file_pads_missing_slots() -> Result<()> {
    let yaml_content = r#"
patterns:
  - "print('$$', $$)"
  - "logger.debug(\"{FN}:{LN}\")"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let settings = LoggerSettings::load_from_file(file.path())?;
    assert_eq!(settings.patterns.len(), PATTERN_SLOTS);
    assert_eq!(settings.pattern(0), "print('$$', $$)");
    assert_eq!(settings.pattern(1), "logger.debug(\"{FN}:{LN}\")");
    assert!(settings.patterns[2..].iter().all(String::is_empty));
    Ok(())
}

#[test]
fn test_load_from_file_rejects_too_many_slots() -> Result<()> {
    let yaml: String = std::iter::once("patterns:\n".to_string())
        .chain((0..=PATTERN_SLOTS).map(|i| format!("  - \"log{}\"\n", i)))
        .collect();
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;

    let err = LoggerSettings::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("expected at most 9 patterns"));
    Ok(())
}

#[test]
fn test_load_from_file_rejects_overlong_template() -> Result<()> {
    let yaml = format!("patterns:\n  - \"{}\"\n", "x".repeat(MAX_TEMPLATE_LENGTH + 1));
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;

    assert!(LoggerSettings::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_load_from_file_invalid_yaml() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"patterns: [unclosed")?;
    let err = LoggerSettings::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse settings file"));
    Ok(())
}

#[test]
fn test_save_then_load_keeps_slots() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("nested").join("patterns.yaml");

    let mut settings = LoggerSettings::load_default()?;
    settings.set_pattern(2, "dbg!({LN})")?;
    settings.save_to_file(&path)?;

    let reloaded = LoggerSettings::load_from_file(&path)?;
    assert_eq!(reloaded, settings);

    let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temporary file should be renamed away");
    Ok(())
}

#[test]
fn test_load_or_default_without_file() -> Result<()> {
    let dir = tempdir()?;
    let settings = LoggerSettings::load_or_default(dir.path().join("absent.yaml"))?;
    assert_eq!(settings, LoggerSettings::load_default()?);
    Ok(())
}

#[test]
fn test_reset_all_restores_defaults() -> Result<()> {
    let mut settings = LoggerSettings::from_patterns(["custom"])?;
    settings.reset_all()?;
    assert_eq!(settings, LoggerSettings::load_default()?);
    Ok(())
}
