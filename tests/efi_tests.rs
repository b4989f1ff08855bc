//! Integration tests for EFI artifact generation

use hackintune::efi::{normalize_tier_name, EfiRequest, BOOT_ARGS};
use hackintune::tier_name;
use plist::Value;
use std::fs;

#[test]
fn test_generation_writes_complete_package() {
    let root = tempfile::tempdir().unwrap();
    let generated = EfiRequest::new(tier_name(50_000), 50_000)
        .generate(root.path())
        .unwrap();

    assert!(generated.dir.ends_with("Budget_Gamer_1080p"));
    assert!(generated.bios_settings.exists());
    assert!(generated.config_plist.exists());

    let bios = fs::read_to_string(&generated.bios_settings).unwrap();
    assert!(bios.contains("BIOS SETUP INSTRUCTIONS (Budget Gamer (1080p))"));
    assert!(bios.contains("[ACTION REQUIRED]"));
    assert!(bios.contains("Above 4G Decoding"));
}

#[test]
fn test_generated_config_is_valid_opencore_plist() {
    let root = tempfile::tempdir().unwrap();
    let generated = EfiRequest::new(tier_name(50_000), 50_000)
        .generate(root.path())
        .unwrap();

    let value = Value::from_file(&generated.config_plist).unwrap();
    let dict = value.as_dictionary().unwrap();

    let generic = dict
        .get("PlatformInfo")
        .and_then(Value::as_dictionary)
        .and_then(|p| p.get("Generic"))
        .and_then(Value::as_dictionary)
        .unwrap();
    assert_eq!(
        generic.get("SystemProductName").and_then(Value::as_string),
        Some("iMac20,1")
    );

    let boot_args = dict
        .get("NVRAM")
        .and_then(Value::as_dictionary)
        .and_then(|n| n.get("Add"))
        .and_then(Value::as_dictionary)
        .and_then(|a| a.get("7C436110-AB2A-4BBB-A880-FE41995C9F82"))
        .and_then(Value::as_dictionary)
        .and_then(|g| g.get("boot-args"))
        .and_then(Value::as_string)
        .unwrap();
    assert_eq!(boot_args, BOOT_ARGS);

    let kexts = dict
        .get("Kernel")
        .and_then(Value::as_dictionary)
        .and_then(|k| k.get("Add"))
        .and_then(Value::as_array)
        .unwrap();
    assert_eq!(kexts.len(), 4);
    assert_eq!(
        kexts[0]
            .as_dictionary()
            .and_then(|e| e.get("BundlePath"))
            .and_then(Value::as_string),
        Some("Lilu.kext")
    );
}

#[test]
fn test_high_budget_gets_mac_pro_smbios() {
    let root = tempfile::tempdir().unwrap();
    let generated = EfiRequest::new(tier_name(999_999), 999_999)
        .generate(root.path())
        .unwrap();

    assert!(generated.dir.ends_with("God_Tier_Dream_Build"));
    let config = fs::read_to_string(&generated.config_plist).unwrap();
    assert!(config.contains("MacPro7,1"));
    assert!(!config.contains("iMac20,1"));
}

#[test]
fn test_regeneration_is_byte_identical() {
    let root = tempfile::tempdir().unwrap();
    let request = EfiRequest::new(tier_name(150_000), 150_000);

    let first = request.generate(root.path()).unwrap();
    let bios_before = fs::read(&first.bios_settings).unwrap();
    let config_before = fs::read(&first.config_plist).unwrap();

    let second = request.generate(root.path()).unwrap();
    assert_eq!(first.dir, second.dir);
    assert_eq!(fs::read(&second.bios_settings).unwrap(), bios_before);
    assert_eq!(fs::read(&second.config_plist).unwrap(), config_before);
}

#[test]
fn test_generation_creates_missing_directories() {
    let root = tempfile::tempdir().unwrap();
    let nested = root.path().join("deeply/nested/output");
    let generated = EfiRequest::new(tier_name(45_000), 45_000)
        .generate(&nested)
        .unwrap();
    assert!(generated.config_plist.exists());
}

#[test]
fn test_tier_names_normalize_to_directory_safe_slugs() {
    for budget in [0, 45_000, 65_000, 90_000, 130_000, 180_000, 250_000, 350_000, 450_000, 550_000]
    {
        let slug = normalize_tier_name(tier_name(budget));
        assert!(!slug.is_empty());
        assert!(slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        assert!(!slug.starts_with('_'));
        assert!(!slug.ends_with('_'));
    }
}
