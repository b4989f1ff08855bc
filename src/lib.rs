//! HackinTune Library
//!
//! Core functionality for the HackinTune toolkit: budget tier selection,
//! OpenCore EFI generation, hardware compatibility scanning, SMBIOS identity
//! generation, and post-install config.plist fixes.

pub mod app;
pub mod audit;
pub mod cli;
pub mod command_executor;
pub mod config_edit;
pub mod efi;
pub mod error;
pub mod esp;
pub mod hardware;
pub mod logic;
pub mod smbios;
pub mod theme;
pub mod tiers;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use audit::{AuditReport, ValidationIssue, ValidationReport};
pub use efi::{EfiRequest, GeneratedEfi};
pub use error::{HackinTuneError, Result};
pub use esp::EspState;
pub use hardware::{DeviceStatus, HardwareScan};
pub use logic::postinstall::{FixOutcome, FreezeVerdict};
pub use logic::preinstall::{recommend, Recommendation, RecommendRequest};
pub use smbios::{generate_identity, SmbiosIdentity};
pub use tiers::{select_tier, tier_name, Part, Tier, THRESHOLDS, TIERS};
pub use types::{BluetoothVendor, PartCategory, SmbiosPreset, WifiVendor};
