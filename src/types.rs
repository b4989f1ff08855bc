//! Type-safe domain types for HackinTune
//!
//! This module replaces stringly-typed part and platform data with proper
//! Rust enums that provide compile-time validation and exhaustive matching.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Hardware part category for a build slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum PartCategory {
    #[strum(serialize = "CPU")]
    Cpu,
    #[strum(serialize = "Motherboard")]
    Motherboard,
    #[strum(serialize = "GPU")]
    Gpu,
    #[strum(serialize = "RAM")]
    Ram,
    #[strum(serialize = "Storage")]
    Storage,
    #[strum(serialize = "PSU")]
    Psu,
    #[strum(serialize = "Cooler")]
    Cooler,
    #[strum(serialize = "Case")]
    Case,
}

/// SMBIOS system identity written into the generated OpenCore config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum SmbiosPreset {
    /// Consumer desktop identity for mainstream builds
    #[default]
    #[strum(serialize = "iMac20,1")]
    Imac20_1,
    /// Workstation identity for high-budget builds
    #[strum(serialize = "MacPro7,1")]
    MacPro7_1,
}

/// Wireless card vendor detected on the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum WifiVendor {
    #[strum(serialize = "Broadcom")]
    Broadcom,
    #[strum(serialize = "Intel")]
    Intel,
    #[strum(serialize = "Realtek USB")]
    RealtekUsb,
    #[strum(serialize = "MediaTek USB")]
    MediatekUsb,
    #[strum(serialize = "Generic USB")]
    GenericUsb,
}

/// Bluetooth controller vendor detected on the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum BluetoothVendor {
    #[strum(serialize = "Intel")]
    Intel,
    #[strum(serialize = "Broadcom")]
    Broadcom,
    #[strum(serialize = "Realtek (internal)")]
    RealtekInternal,
    #[strum(serialize = "CSR/Generic")]
    CsrGeneric,
}
