//! EFI system partition state
//!
//! One explicit probe replaces scattered filesystem checks: `EspState::probe`
//! reports the mounted OpenCore directory (if any) and the EFI partition
//! identifiers `diskutil list` knows about. Mounting and backup go through
//! `command_executor`; identifier parsing is pure and fixture-tested.

use crate::command_executor::{run_command, CommandType};
use crate::error::{HackinTuneError, Result};
use std::path::{Path, PathBuf};

/// Volume roots an EFI partition conventionally mounts at
const EFI_VOLUMES: [&str; 2] = ["/Volumes/EFI", "/Volumes/ESP"];

/// Snapshot of the host's EFI partition situation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EspState {
    /// Mounted OpenCore directory (`<volume>/EFI/OC`), when a volume holds a
    /// config.plist
    pub oc_dir: Option<PathBuf>,
    /// EFI partition identifiers from `diskutil list` (e.g. "disk0s1")
    pub partitions: Vec<String>,
}

impl EspState {
    /// Probe mounted volumes and the partition table.
    pub fn probe() -> Self {
        let oc_dir = find_mounted_oc_dir();
        let partitions = match run_command(&CommandType::DiskutilList) {
            Ok(listing) => parse_efi_identifiers(&listing),
            Err(e) => {
                log::warn!("diskutil list failed: {}", e);
                Vec::new()
            }
        };
        Self { oc_dir, partitions }
    }

    pub fn is_mounted(&self) -> bool {
        self.oc_dir.is_some()
    }

    /// config.plist path on the mounted partition
    pub fn config_plist(&self) -> Option<PathBuf> {
        self.oc_dir.as_ref().map(|dir| dir.join("config.plist"))
    }

    /// Mount an EFI partition by identifier and re-probe.
    pub fn mount(identifier: &str) -> Result<Self> {
        run_command(&CommandType::DiskutilMount(identifier.to_string()))
            .map_err(HackinTuneError::command)?;
        let state = Self::probe();
        if !state.is_mounted() {
            return Err(HackinTuneError::efi(format!(
                "mounted {} but no OpenCore config.plist found under /Volumes/EFI or /Volumes/ESP",
                identifier
            )));
        }
        Ok(state)
    }

    /// Mount the first EFI partition the partition table lists.
    pub fn auto_mount() -> Result<Self> {
        let state = Self::probe();
        if state.is_mounted() {
            return Ok(state);
        }
        let identifier = state
            .partitions
            .first()
            .ok_or_else(|| HackinTuneError::efi("no EFI partition found in diskutil list"))?;
        Self::mount(identifier)
    }

    /// Zip the mounted EFI folder to
    /// `~/Documents/Hackintosh_Backups/EFI_Backup_<timestamp>.zip` and return
    /// the archive path.
    pub fn backup(&self) -> Result<PathBuf> {
        let oc_dir = self
            .oc_dir
            .as_ref()
            .ok_or_else(|| HackinTuneError::efi("EFI partition is not mounted"))?;
        // <volume>/EFI/OC -> <volume>
        let volume = oc_dir
            .parent()
            .and_then(Path::parent)
            .ok_or_else(|| HackinTuneError::efi("unexpected OpenCore directory layout"))?;

        let backups = dirs::document_dir()
            .ok_or_else(|| HackinTuneError::general("cannot resolve Documents directory"))?
            .join("Hackintosh_Backups");
        std::fs::create_dir_all(&backups).map_err(|e| {
            HackinTuneError::efi(format!("cannot create {}: {}", backups.display(), e))
        })?;

        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archive = backups.join(format!("EFI_Backup_{}.zip", stamp));

        run_command(&CommandType::Zip {
            archive: archive.to_string_lossy().into_owned(),
            source: "EFI".to_string(),
            cwd: volume.to_string_lossy().into_owned(),
        })
        .map_err(HackinTuneError::command)?;

        log::info!("EFI backup written to {}", archive.display());
        Ok(archive)
    }
}

fn find_mounted_oc_dir() -> Option<PathBuf> {
    for volume in EFI_VOLUMES {
        let oc_dir = Path::new(volume).join("EFI").join("OC");
        if oc_dir.join("config.plist").exists() {
            return Some(oc_dir);
        }
    }
    None
}

/// Pull EFI partition identifiers out of `diskutil list` output: the sixth
/// whitespace column of every line mentioning EFI.
pub fn parse_efi_identifiers(listing: &str) -> Vec<String> {
    listing
        .lines()
        .filter(|line| line.contains("EFI"))
        .filter_map(|line| line.split_whitespace().nth(5))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISKUTIL_LIST: &str = "\
/dev/disk0 (internal, physical):
   #:                       TYPE NAME                    SIZE       IDENTIFIER
   0:      GUID_partition_scheme                        *500.3 GB   disk0
   1:                        EFI EFI                     209.7 MB   disk0s1
   2:                 Apple_APFS Container disk1         499.9 GB   disk0s2

/dev/disk2 (external, physical):
   #:                       TYPE NAME                    SIZE       IDENTIFIER
   0:      GUID_partition_scheme                        *31.0 GB    disk2
   1:                        EFI ESP                     209.7 MB   disk2s1
   2:       Microsoft Basic Data INSTALLER               30.8 GB    disk2s2
";

    #[test]
    fn test_parse_efi_identifiers() {
        let ids = parse_efi_identifiers(DISKUTIL_LIST);
        assert_eq!(ids, vec!["disk0s1", "disk2s1"]);
    }

    #[test]
    fn test_parse_ignores_short_lines() {
        assert!(parse_efi_identifiers("EFI\n1: EFI\n").is_empty());
        assert!(parse_efi_identifiers("").is_empty());
    }
}
