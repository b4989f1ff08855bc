//! EFI artifact generation
//!
//! Materializes a BIOS-settings guide and a bootable OpenCore configuration
//! for a selected tier under `<output-root>/<normalized-tier-name>/`.
//!
//! # Design
//! - The budget picks the SMBIOS system identity at a single threshold;
//!   everything else in the boot configuration is fixed.
//! - Write failures are never swallowed. Every failed path comes back in a
//!   structured error naming the offending file, and intermediate
//!   directories are created rather than assumed.

pub mod templates;

use crate::error::{HackinTuneError, Result};
use crate::types::SmbiosPreset;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed boot arguments injected into every generated configuration
pub const BOOT_ARGS: &str = "-v keepsyms=1 debug=0x100 agdpmod=pikera alcid=1";

/// Budgets below this use the consumer desktop SMBIOS, at or above it the
/// workstation SMBIOS
pub const SMBIOS_THRESHOLD: u32 = 100_000;

/// SMBIOS preset for an originating budget
pub fn smbios_for_budget(budget: u32) -> SmbiosPreset {
    if budget < SMBIOS_THRESHOLD {
        SmbiosPreset::Imac20_1
    } else {
        SmbiosPreset::MacPro7_1
    }
}

/// Normalize a tier name into a filesystem-safe directory name.
///
/// Alphanumerics are kept, parentheses vanish, every other character becomes
/// `_`; separator runs collapse and edges are trimmed.
/// `"God Tier (Dream Build)"` becomes `"God_Tier_Dream_Build"`.
pub fn normalize_tier_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if c != '(' && c != ')' && !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

/// A request to generate EFI artifacts for a selected tier
#[derive(Debug, Clone)]
pub struct EfiRequest {
    /// Display name of the selected tier
    pub tier_name: String,
    /// Budget the tier was selected for, used only for the SMBIOS preset
    pub budget: u32,
}

/// Paths of the artifacts a generation produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEfi {
    /// Tier directory under the output root
    pub dir: PathBuf,
    /// BIOS instructions text file
    pub bios_settings: PathBuf,
    /// OpenCore boot configuration
    pub config_plist: PathBuf,
}

impl EfiRequest {
    pub fn new(tier_name: impl Into<String>, budget: u32) -> Self {
        Self {
            tier_name: tier_name.into(),
            budget,
        }
    }

    /// SMBIOS identity this request will write
    pub fn smbios_preset(&self) -> SmbiosPreset {
        smbios_for_budget(self.budget)
    }

    /// Directory name the artifacts land in
    pub fn dir_name(&self) -> String {
        normalize_tier_name(&self.tier_name)
    }

    /// Render and write both artifacts under `output_root`.
    ///
    /// Creates `<output_root>/<dir_name>/` and its `EFI/OC` subtree, then
    /// writes `BIOS_SETTINGS.txt` and `EFI/OC/config.plist`.
    pub fn generate(&self, output_root: &Path) -> Result<GeneratedEfi> {
        let dir = output_root.join(self.dir_name());
        let oc_dir = dir.join("EFI").join("OC");
        fs::create_dir_all(&oc_dir).map_err(|e| {
            HackinTuneError::efi(format!("cannot create {}: {}", oc_dir.display(), e))
        })?;

        let bios_settings = dir.join("BIOS_SETTINGS.txt");
        let bios_text = templates::render_bios_settings(&self.tier_name);
        fs::write(&bios_settings, bios_text).map_err(|e| {
            HackinTuneError::efi(format!("cannot write {}: {}", bios_settings.display(), e))
        })?;

        let config_plist = oc_dir.join("config.plist");
        let preset = self.smbios_preset();
        let config = templates::render_config_plist(&preset.to_string(), BOOT_ARGS);
        fs::write(&config_plist, config).map_err(|e| {
            HackinTuneError::efi(format!("cannot write {}: {}", config_plist.display(), e))
        })?;

        log::info!(
            "Generated EFI for '{}' ({}) at {}",
            self.tier_name,
            preset,
            dir.display()
        );

        Ok(GeneratedEfi {
            dir,
            bios_settings,
            config_plist,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tier_names() {
        assert_eq!(
            normalize_tier_name("God Tier (Dream Build)"),
            "God_Tier_Dream_Build"
        );
        assert_eq!(
            normalize_tier_name("Mid-Range (1080p Ultra)"),
            "Mid_Range_1080p_Ultra"
        );
        assert_eq!(
            normalize_tier_name("Entry Level (Web/Office)"),
            "Entry_Level_Web_Office"
        );
        assert_eq!(normalize_tier_name("Budget Gamer (1080p)"), "Budget_Gamer_1080p");
    }

    #[test]
    fn test_normalize_collapses_and_trims() {
        assert_eq!(normalize_tier_name("  a - / b  "), "a_b");
        assert_eq!(normalize_tier_name("(x)"), "x");
        assert_eq!(normalize_tier_name(""), "");
    }

    #[test]
    fn test_smbios_threshold() {
        assert_eq!(smbios_for_budget(40_000), SmbiosPreset::Imac20_1);
        assert_eq!(smbios_for_budget(99_999), SmbiosPreset::Imac20_1);
        assert_eq!(smbios_for_budget(100_000), SmbiosPreset::MacPro7_1);
        assert_eq!(smbios_for_budget(150_000), SmbiosPreset::MacPro7_1);
    }
}
