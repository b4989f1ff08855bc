//! Integration tests for the post-install fix pipeline against a generated
//! config.plist

use hackintune::config_edit;
use hackintune::logic::postinstall::{fix_audio, toggle_trim, FixOutcome};
use hackintune::logic::preinstall::build_artifacts;
use plist::Value;
use std::path::{Path, PathBuf};

fn generate_config(root: &Path) -> PathBuf {
    build_artifacts(50_000, Some(root.to_path_buf()))
        .unwrap()
        .config_plist
}

#[test]
fn test_audio_fix_respects_generated_boot_args() {
    let root = tempfile::tempdir().unwrap();
    let config = generate_config(root.path());

    // Generated configs already ship alcid=1
    let outcome = fix_audio(&config).unwrap();
    assert!(matches!(outcome, FixOutcome::Skipped(_)));

    // Strip it and the fix reapplies
    config_edit::write_boot_args(&config, "-v keepsyms=1 debug=0x100").unwrap();
    let outcome = fix_audio(&config).unwrap();
    assert!(outcome.is_applied());
    assert!(config_edit::read_boot_args(&config)
        .unwrap()
        .ends_with("alcid=1"));
}

#[test]
fn test_trim_toggle_roundtrip_survives_reload() {
    let root = tempfile::tempdir().unwrap();
    let config = generate_config(root.path());

    toggle_trim(&config).unwrap();
    assert!(config_edit::read_quirk_bool(&config, "ThirdPartyDrives").unwrap());

    // The document on disk must still be a valid OpenCore plist
    let value = Value::from_file(&config).unwrap();
    assert!(value.as_dictionary().unwrap().get("Kernel").is_some());

    toggle_trim(&config).unwrap();
    assert!(!config_edit::read_quirk_bool(&config, "ThirdPartyDrives").unwrap());
}

#[test]
fn test_every_mutation_leaves_a_backup() {
    let root = tempfile::tempdir().unwrap();
    let config = generate_config(root.path());
    let bak = config_edit::backup_path(&config);
    assert!(!bak.exists());

    let before = std::fs::read(&config).unwrap();
    toggle_trim(&config).unwrap();
    assert_eq!(std::fs::read(&bak).unwrap(), before);
}

#[test]
fn test_kext_injection_registers_before_stock_kexts() {
    let root = tempfile::tempdir().unwrap();
    let config = generate_config(root.path());

    config_edit::add_kext_entry(&config, "AirportItlwm.kext").unwrap();

    let value = Value::from_file(&config).unwrap();
    let add = value
        .as_dictionary()
        .and_then(|r| r.get("Kernel"))
        .and_then(Value::as_dictionary)
        .and_then(|k| k.get("Add"))
        .and_then(Value::as_array)
        .unwrap();
    assert_eq!(add.len(), 5);
    assert_eq!(
        add[0]
            .as_dictionary()
            .and_then(|e| e.get("BundlePath"))
            .and_then(Value::as_string),
        Some("AirportItlwm.kext")
    );
    // Lilu still loads, just after the injected kext
    assert_eq!(
        add[1]
            .as_dictionary()
            .and_then(|e| e.get("BundlePath"))
            .and_then(Value::as_string),
        Some("Lilu.kext")
    );
}
