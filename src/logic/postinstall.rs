//! Post-install orchestration
//!
//! Fixes that run against a mounted OpenCore configuration AFTER macOS is
//! installed: audio codec injection, TRIM, power management, kext injection,
//! kext update checks, kernel panic triage, and OpenCanopy theme installs.
//!
//! # Failure Policy
//!
//! Config navigation errors (missing NVRAM dictionary, unreadable plist) are
//! hard errors. Individual fixes that legitimately have nothing to do report
//! `FixOutcome::Skipped` instead, so a fully tuned system runs the whole
//! suite without touching the disk.
//!
//! # Backups
//!
//! Every mutation goes through `config_edit`, which copies the document to
//! `config.plist.bak` before writing.

// Library API — consumed by TUI and CLI
#![allow(dead_code)]

use crate::audit::{power_management_optimal, trim_enabled};
use crate::command_executor::{run_command, CommandType};
use crate::config_edit;
use crate::error::{HackinTuneError, Result};

use std::fmt;
use std::path::Path;

// ============================================================================
// Fix Outcome
// ============================================================================

/// Outcome of one fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixOutcome {
    /// The fix changed something (with a description of the change).
    Applied(String),
    /// Nothing to do (with the reason).
    Skipped(String),
    /// The fix ran but a shell step failed (non-fatal, with stderr).
    Failed(String),
}

impl fmt::Display for FixOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied(what) => write!(f, "Applied: {}", what),
            Self::Skipped(why) => write!(f, "Skipped: {}", why),
            Self::Failed(err) => write!(f, "Failed: {}", err),
        }
    }
}

impl FixOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// Recover an outcome from its own `Display` form. Report screens carry
    /// plain text lines; this lets the renderer color outcome lines without
    /// threading the enum through the message channel.
    pub fn from_report_line(line: &str) -> Option<Self> {
        if let Some(rest) = line.strip_prefix("Applied: ") {
            Some(Self::Applied(rest.to_string()))
        } else if let Some(rest) = line.strip_prefix("Skipped: ") {
            Some(Self::Skipped(rest.to_string()))
        } else if let Some(rest) = line.strip_prefix("Failed: ") {
            Some(Self::Failed(rest.to_string()))
        } else {
            None
        }
    }
}

// ============================================================================
// Audio / TRIM
// ============================================================================

/// Inject `alcid=1` into boot-args unless an alcid layout is already set.
pub fn fix_audio(config: &Path) -> Result<FixOutcome> {
    let (args, changed) = config_edit::ensure_boot_arg(config, "alcid=1")?;
    Ok(if changed {
        FixOutcome::Applied(format!("boot-args now '{}'", args))
    } else {
        FixOutcome::Skipped("an alcid layout is already set".to_string())
    })
}

/// Flip the `ThirdPartyDrives` kernel quirk. A missing quirk counts as off.
pub fn toggle_trim(config: &Path) -> Result<FixOutcome> {
    let current = config_edit::read_quirk_bool(config, "ThirdPartyDrives").unwrap_or(false);
    config_edit::set_quirk_bool(config, "ThirdPartyDrives", !current)?;
    Ok(FixOutcome::Applied(format!(
        "ThirdPartyDrives {} -> {}",
        current, !current
    )))
}

/// Probe power management and storage, then apply only the fixes the host
/// actually needs. `SetApfsTrimTimeout 0` is always enforced.
pub fn smart_optimize(config: &Path) -> Result<Vec<FixOutcome>> {
    let mut outcomes = Vec::new();

    match run_command(&CommandType::PmsetStatus) {
        Ok(pmset) if power_management_optimal(&pmset) => {
            outcomes.push(FixOutcome::Skipped("hibernation already off".to_string()));
        }
        Ok(_) => match run_command(&CommandType::PmsetHibernateMode(0)) {
            Ok(_) => outcomes.push(FixOutcome::Applied("hibernatemode set to 0".to_string())),
            Err(e) => outcomes.push(FixOutcome::Failed(format!("pmset: {}", e))),
        },
        Err(e) => outcomes.push(FixOutcome::Failed(format!("pmset probe: {}", e))),
    }

    match run_command(&CommandType::SystemProfiler("SPStorageDataType".to_string())) {
        Ok(storage) if trim_enabled(&storage) => {
            outcomes.push(FixOutcome::Skipped("TRIM already enabled".to_string()));
        }
        _ => {
            config_edit::set_quirk_bool(config, "ThirdPartyDrives", true)?;
            outcomes.push(FixOutcome::Applied("ThirdPartyDrives enabled".to_string()));
        }
    }

    config_edit::set_quirk_int(config, "SetApfsTrimTimeout", 0)?;
    outcomes.push(FixOutcome::Applied("SetApfsTrimTimeout set to 0".to_string()));

    Ok(outcomes)
}

// ============================================================================
// Stability Scan
// ============================================================================

/// Classification of the most recent kernel panics, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreezeVerdict {
    /// Nothing panic-related in the scanned window
    NoPanics,
    /// IOPCIFamily in the panic text, usually a GPU or bus patch problem
    PciBus,
    /// AppleALC in the panic text, usually a bad alcid layout
    AudioDriver,
    /// A panic with no recognized driver signature
    Unclassified,
}

impl fmt::Display for FreezeVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NoPanics => "No recent kernel panics detected in the last 12h.",
            Self::PciBus => "Potential freeze found: IOPCIFamily error. Check GPU/bus patches.",
            Self::AudioDriver => "Potential freeze found: audio driver conflict. Check alcid.",
            Self::Unclassified => "Recent panic found. Check your drivers for compatibility.",
        };
        write!(f, "{}", text)
    }
}

/// Classify captured `log show` output. Only the last three panic lines are
/// considered, so one old crash does not mask the current driver at fault.
pub fn classify_freeze(log_output: &str) -> FreezeVerdict {
    let panics: Vec<&str> = log_output
        .lines()
        .filter(|line| line.to_ascii_lowercase().contains("panic"))
        .collect();
    let recent = panics
        .iter()
        .rev()
        .take(3)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    if recent.is_empty() {
        FreezeVerdict::NoPanics
    } else if recent.contains("IOPCIFamily") {
        FreezeVerdict::PciBus
    } else if recent.contains("AppleALC") {
        FreezeVerdict::AudioDriver
    } else {
        FreezeVerdict::Unclassified
    }
}

/// Scan the last 12 hours of the system log for kernel panics. A failed
/// `log show` (or an empty capture) reads as no panics.
pub fn analyze_freeze() -> FreezeVerdict {
    let logs = run_command(&CommandType::LogShowPanics).unwrap_or_else(|e| {
        log::warn!("log show failed: {}", e);
        String::new()
    });
    classify_freeze(&logs)
}

// ============================================================================
// Kext Updates
// ============================================================================

/// Kexts whose upstream releases the update check polls
pub const ACIDANTHERA_KEXTS: [&str; 4] = ["Lilu", "WhateverGreen", "AppleALC", "VirtualSMC"];

/// Intel Wi-Fi kext, Sonoma build
pub const AIRPORT_ITLWM_URL: &str =
    "https://github.com/OpenIntelWireless/itlwm/releases/download/v2.3.0/AirportItlwm_v2.3.0_stable_Sonoma.kext.zip";

/// Intel Bluetooth firmware kext
pub const INTEL_BLUETOOTH_URL: &str =
    "https://github.com/OpenIntelWireless/IntelBluetoothFirmware/releases/download/v2.4.0/IntelBluetoothFirmware-v2.4.0.zip";

/// VirtualSMC bundle (carries SMCBatteryManager for laptops)
pub const VIRTUAL_SMC_URL: &str =
    "https://github.com/acidanthera/VirtualSMC/releases/download/1.3.2/VirtualSMC-1.3.2-RELEASE.zip";

/// Clover-style USB Wi-Fi adapter driver page (browser install)
pub const USB_WIFI_REPO_URL: &str = "https://github.com/chris1111/Wireless-USB-Adapter-Clover";

/// Pull `tag_name` out of a GitHub releases/latest JSON document.
pub fn parse_release_tag(json: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    value
        .get("tag_name")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| HackinTuneError::parse("release JSON has no tag_name"))
}

/// Query the latest release tag for each Acidanthera kext. Network failures
/// degrade to a "Check Failed" row rather than aborting the sweep.
pub fn check_kext_updates() -> Vec<(String, String)> {
    ACIDANTHERA_KEXTS
        .iter()
        .map(|kext| {
            let url = format!(
                "https://api.github.com/repos/acidanthera/{}/releases/latest",
                kext
            );
            let tag = run_command(&CommandType::CurlFetch(url))
                .map_err(HackinTuneError::command)
                .and_then(|body| parse_release_tag(&body))
                .unwrap_or_else(|e| {
                    log::warn!("update check for {} failed: {}", kext, e);
                    "Check Failed".to_string()
                });
            (kext.to_string(), tag)
        })
        .collect()
}

// ============================================================================
// Kext Injection
// ============================================================================

/// Download a kext archive, unpack it, copy the bundle into the mounted
/// OpenCore Kexts directory, and prepend a Kernel:Add entry for it.
pub fn inject_kext(oc_dir: &Path, name: &str, url: &str) -> Result<FixOutcome> {
    let staging = tempfile::tempdir()
        .map_err(|e| HackinTuneError::efi(format!("cannot create staging dir: {}", e)))?;
    let archive = staging.path().join(format!("{}.zip", name));

    run_command(&CommandType::CurlDownload {
        url: url.to_string(),
        dest: archive.to_string_lossy().into_owned(),
    })
    .map_err(|e| HackinTuneError::command(format!("download of {}: {}", name, e)))?;

    run_command(&CommandType::Unzip {
        archive: archive.to_string_lossy().into_owned(),
        dest: staging.path().to_string_lossy().into_owned(),
    })
    .map_err(|e| HackinTuneError::command(format!("unpack of {}: {}", name, e)))?;

    let bundle = find_kext_bundle(staging.path())?.ok_or_else(|| {
        HackinTuneError::efi(format!("archive for {} contains no .kext bundle", name))
    })?;
    let bundle_name = bundle
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| HackinTuneError::efi("kext bundle has a non-UTF-8 name"))?
        .to_string();

    let kexts_dir = oc_dir.join("Kexts");
    std::fs::create_dir_all(&kexts_dir).map_err(|e| {
        HackinTuneError::efi(format!("cannot create {}: {}", kexts_dir.display(), e))
    })?;
    copy_dir(&bundle, &kexts_dir.join(&bundle_name))?;

    config_edit::add_kext_entry(&oc_dir.join("config.plist"), &bundle_name)?;

    log::info!("Injected {} into {}", bundle_name, kexts_dir.display());
    Ok(FixOutcome::Applied(format!(
        "{} installed and registered",
        bundle_name
    )))
}

// ============================================================================
// OpenCanopy Theme Install
// ============================================================================

/// Acidanthera OcBinaryData archive carrying the OpenCanopy icons and themes
pub const OC_BINARY_DATA_URL: &str =
    "https://github.com/acidanthera/OcBinaryData/archive/refs/heads/master.zip";

/// Download the OcBinaryData archive and copy its `Resources` tree into the
/// mounted OpenCore directory, refreshing the boot picker icons and themes.
pub fn install_oc_theme(oc_dir: &Path) -> Result<FixOutcome> {
    let staging = tempfile::tempdir()
        .map_err(|e| HackinTuneError::efi(format!("cannot create staging dir: {}", e)))?;
    let archive = staging.path().join("themes.zip");

    run_command(&CommandType::CurlDownload {
        url: OC_BINARY_DATA_URL.to_string(),
        dest: archive.to_string_lossy().into_owned(),
    })
    .map_err(|e| HackinTuneError::command(format!("theme download: {}", e)))?;

    run_command(&CommandType::Unzip {
        archive: archive.to_string_lossy().into_owned(),
        dest: staging.path().to_string_lossy().into_owned(),
    })
    .map_err(|e| HackinTuneError::command(format!("theme unpack: {}", e)))?;

    let resources = find_resources_dir(staging.path())?
        .ok_or_else(|| HackinTuneError::efi("theme archive contains no Resources tree"))?;
    copy_dir(&resources, &oc_dir.join("Resources"))?;

    log::info!("Installed OpenCanopy resources into {}", oc_dir.display());
    Ok(FixOutcome::Applied(
        "OpenCanopy icons and themes installed to Resources".to_string(),
    ))
}

/// Find a `Resources` directory at the top of an unpacked archive or inside
/// its single wrapping folder (GitHub archives unpack as `<repo>-master/`).
fn find_resources_dir(root: &Path) -> Result<Option<std::path::PathBuf>> {
    let top = root.join("Resources");
    if top.is_dir() {
        return Ok(Some(top));
    }
    for path in read_dir(root)? {
        if path.is_dir() {
            let nested = path.join("Resources");
            if nested.is_dir() {
                return Ok(Some(nested));
            }
        }
    }
    Ok(None)
}

/// Find the first `.kext` bundle under a directory, one level of descent.
/// Archives either unpack the bundle at the top or inside a single folder.
fn find_kext_bundle(root: &Path) -> Result<Option<std::path::PathBuf>> {
    let mut subdirs = Vec::new();
    for entry in read_dir(root)? {
        let path = entry;
        if is_kext(&path) {
            return Ok(Some(path));
        }
        if path.is_dir() {
            subdirs.push(path);
        }
    }
    for dir in subdirs {
        for path in read_dir(&dir)? {
            if is_kext(&path) {
                return Ok(Some(path));
            }
        }
    }
    Ok(None)
}

fn is_kext(path: &Path) -> bool {
    path.is_dir() && path.extension().map_or(false, |ext| ext == "kext")
}

fn read_dir(dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| HackinTuneError::efi(format!("cannot read {}: {}", dir.display(), e)))?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| HackinTuneError::efi(format!("cannot read {}: {}", dir.display(), e)))?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)
        .map_err(|e| HackinTuneError::efi(format!("cannot create {}: {}", dst.display(), e)))?;
    for path in read_dir(src)? {
        let name = match path.file_name() {
            Some(name) => name.to_owned(),
            None => continue,
        };
        let target = dst.join(name);
        if path.is_dir() {
            copy_dir(&path, &target)?;
        } else {
            std::fs::copy(&path, &target).map_err(|e| {
                HackinTuneError::efi(format!("cannot copy {}: {}", path.display(), e))
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::efi::templates::render_config_plist;
    use crate::efi::BOOT_ARGS;
    use std::fs;

    fn write_generated_config(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("config.plist");
        fs::write(&path, render_config_plist("iMac20,1", BOOT_ARGS)).unwrap();
        path
    }

    #[test]
    fn test_parse_release_tag() {
        let json = r#"{"tag_name": "1.7.0", "name": "Lilu 1.7.0", "assets": []}"#;
        assert_eq!(parse_release_tag(json).unwrap(), "1.7.0");
    }

    #[test]
    fn test_parse_release_tag_missing() {
        assert!(parse_release_tag(r#"{"message": "Not Found"}"#).is_err());
        assert!(parse_release_tag("not json").is_err());
    }

    #[test]
    fn test_fix_outcome_display() {
        assert_eq!(
            FixOutcome::Applied("boot-args now '-v alcid=1'".to_string()).to_string(),
            "Applied: boot-args now '-v alcid=1'"
        );
        assert_eq!(
            FixOutcome::Skipped("TRIM already enabled".to_string()).to_string(),
            "Skipped: TRIM already enabled"
        );
        assert_eq!(
            FixOutcome::Failed("pmset: exit 1".to_string()).to_string(),
            "Failed: pmset: exit 1"
        );
    }

    #[test]
    fn test_fix_audio_skips_when_layout_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_generated_config(dir.path());

        // Generated boot-args already carry alcid=1
        let outcome = fix_audio(&path).unwrap();
        assert!(matches!(outcome, FixOutcome::Skipped(_)));

        config_edit::write_boot_args(&path, "-v keepsyms=1").unwrap();
        let outcome = fix_audio(&path).unwrap();
        assert!(outcome.is_applied());
        assert_eq!(
            config_edit::read_boot_args(&path).unwrap(),
            "-v keepsyms=1 alcid=1"
        );
    }

    #[test]
    fn test_toggle_trim_flips_from_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_generated_config(dir.path());

        // Quirk absent counts as off, first toggle turns it on
        let outcome = toggle_trim(&path).unwrap();
        assert!(outcome.is_applied());
        assert!(config_edit::read_quirk_bool(&path, "ThirdPartyDrives").unwrap());

        toggle_trim(&path).unwrap();
        assert!(!config_edit::read_quirk_bool(&path, "ThirdPartyDrives").unwrap());
    }

    #[test]
    fn test_fix_outcome_report_line_roundtrip() {
        for outcome in [
            FixOutcome::Applied("hibernatemode set to 0".to_string()),
            FixOutcome::Skipped("TRIM already enabled".to_string()),
            FixOutcome::Failed("pmset: exit 1".to_string()),
        ] {
            assert_eq!(
                FixOutcome::from_report_line(&outcome.to_string()),
                Some(outcome)
            );
        }
        assert_eq!(FixOutcome::from_report_line("Model:        iMac20,1"), None);
        assert_eq!(FixOutcome::from_report_line(""), None);
    }

    #[test]
    fn test_classify_freeze_verdicts() {
        assert_eq!(classify_freeze(""), FreezeVerdict::NoPanics);
        assert_eq!(
            classify_freeze("kernel boot ok\nno incidents today\n"),
            FreezeVerdict::NoPanics
        );
        assert_eq!(
            classify_freeze("2026-08-23 kernel: Panic(CPU 0): IOPCIFamily fault\n"),
            FreezeVerdict::PciBus
        );
        assert_eq!(
            classify_freeze("panic in AppleALC::layoutLoadCallback\n"),
            FreezeVerdict::AudioDriver
        );
        assert_eq!(
            classify_freeze("kernel panic: somethingElse\n"),
            FreezeVerdict::Unclassified
        );
    }

    #[test]
    fn test_classify_freeze_uses_only_recent_panics() {
        // An old IOPCIFamily crash followed by four newer unrelated panics
        let logs = "panic: IOPCIFamily fault\n\
                    panic: watchdog\n\
                    panic: watchdog\n\
                    panic: watchdog\n\
                    panic: watchdog\n";
        assert_eq!(classify_freeze(logs), FreezeVerdict::Unclassified);
    }

    #[test]
    fn test_freeze_verdict_messages() {
        assert!(FreezeVerdict::NoPanics.to_string().contains("last 12h"));
        assert!(FreezeVerdict::PciBus.to_string().contains("IOPCIFamily"));
        assert!(FreezeVerdict::AudioDriver.to_string().contains("alcid"));
    }

    #[test]
    fn test_find_resources_dir_descends_into_archive_folder() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("OcBinaryData-master/Resources/Image")).unwrap();
        fs::create_dir_all(dir.path().join("__MACOSX")).unwrap();

        let found = find_resources_dir(dir.path()).unwrap().unwrap();
        assert!(found.ends_with("OcBinaryData-master/Resources"));

        // A top-level Resources wins over a nested one
        fs::create_dir_all(dir.path().join("Resources")).unwrap();
        let found = find_resources_dir(dir.path()).unwrap().unwrap();
        assert_eq!(found, dir.path().join("Resources"));
    }

    #[test]
    fn test_find_resources_dir_empty_archive() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("OcBinaryData-master/Docs")).unwrap();
        assert!(find_resources_dir(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_find_kext_bundle_descends_one_level() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("release/AirportItlwm.kext/Contents")).unwrap();
        fs::create_dir_all(dir.path().join("__MACOSX")).unwrap();

        let found = find_kext_bundle(dir.path()).unwrap().unwrap();
        assert!(found.ends_with("AirportItlwm.kext"));
    }

    #[test]
    fn test_copy_dir_is_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("Sample.kext");
        fs::create_dir_all(src.join("Contents/MacOS")).unwrap();
        fs::write(src.join("Contents/Info.plist"), "<plist/>").unwrap();
        fs::write(src.join("Contents/MacOS/Sample"), [0u8; 4]).unwrap();

        let dst = dir.path().join("Kexts/Sample.kext");
        copy_dir(&src, &dst).unwrap();
        assert!(dst.join("Contents/Info.plist").exists());
        assert!(dst.join("Contents/MacOS/Sample").exists());
    }
}
