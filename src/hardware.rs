//! Hardware compatibility scanning
//!
//! Classifies the host's Wi-Fi, Bluetooth, and audio hardware for Hackintosh
//! compatibility, and detects the chassis type.
//!
//! # Design
//!
//! - **Pure classifiers**: every decision is a function over captured command
//!   output, so the logic is unit-testable with canned fixtures on any OS.
//! - **Orchestration at the edge**: `HardwareScan::detect()` is the only
//!   place that shells out, via `command_executor`.
//! - Empty command output means the probe found nothing, not that it failed;
//!   classification falls through to the next probe.

// Library API - consumed by TUI and post-install logic
#![allow(dead_code)]

use crate::command_executor::{run_command, CommandType};
use crate::types::{BluetoothVendor, WifiVendor};
use std::fmt;

/// Compatibility verdict for a detected device
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceStatus {
    /// Supported, with the recommended driver path named
    Compatible(String),
    /// Present but unsupported on macOS
    Incompatible(String),
    /// Nothing detected
    NotFound,
}

impl DeviceStatus {
    /// Short label for the TUI status line
    pub fn label(&self) -> String {
        match self {
            Self::Compatible(name) => format!("Recommended: {}", name),
            Self::Incompatible(name) => format!("Incompatible: {}", name),
            Self::NotFound => "Not Detected".to_string(),
        }
    }

    pub fn is_compatible(&self) -> bool {
        matches!(self, Self::Compatible(_))
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Wi-Fi classification result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiScan {
    pub status: DeviceStatus,
    pub vendor: Option<WifiVendor>,
}

/// Bluetooth classification result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BluetoothScan {
    pub status: DeviceStatus,
    pub vendor: Option<BluetoothVendor>,
}

/// Aggregated scan results consumed by the TUI and post-install logic
#[derive(Debug, Clone)]
pub struct HardwareScan {
    pub wifi: WifiScan,
    pub bluetooth: BluetoothScan,
    /// Display label for the audio fix button ("Realtek Audio", "Audio (...)")
    pub audio_label: String,
    pub is_laptop: bool,
}

impl HardwareScan {
    /// Probe the host and classify everything.
    ///
    /// Shells out to `ioreg`, `system_profiler`, and `sysctl`; failed probes
    /// degrade to empty captures rather than aborting the scan.
    pub fn detect() -> Self {
        let bcm_wlan = run_command(&CommandType::IoregNode("AppleBCMWLANCore".to_string()))
            .unwrap_or_default();
        let network_profile =
            run_command(&CommandType::SystemProfiler("SPNetworkDataType".to_string()))
                .unwrap_or_default();
        let usb_profile = run_command(&CommandType::SystemProfiler("SPUSBDataType".to_string()))
            .unwrap_or_default();
        let bus_sweep = run_command(&CommandType::IoregBusSweep).unwrap_or_default();
        let bt_profile =
            run_command(&CommandType::SystemProfiler("SPBluetoothDataType".to_string()))
                .unwrap_or_default();
        let audio_codec =
            run_command(&CommandType::IoregNode("IOHDACodecDevice".to_string()))
                .unwrap_or_default();
        let hw_model = run_command(&CommandType::Sysctl("hw.model".to_string())).unwrap_or_default();

        let scan = Self {
            wifi: classify_wifi(&bcm_wlan, &network_profile, &usb_profile, &bus_sweep),
            bluetooth: classify_bluetooth(&usb_profile, &bt_profile),
            audio_label: audio_label(&audio_codec),
            is_laptop: is_laptop(&hw_model),
        };

        log::info!(
            "Hardware scan: wifi={}, bluetooth={}, audio={}, laptop={}",
            scan.wifi.status,
            scan.bluetooth.status,
            scan.audio_label,
            scan.is_laptop
        );

        scan
    }

    /// One-line summary for the status bar
    pub fn summary(&self) -> String {
        let wifi = self
            .wifi
            .vendor
            .map(|v| v.to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        let bt = self
            .bluetooth
            .vendor
            .map(|v| v.to_string())
            .unwrap_or_else(|| "None".to_string());
        format!("Scan Complete: Found {} Wi-Fi & {} BT.", wifi, bt)
    }
}

impl Default for HardwareScan {
    fn default() -> Self {
        Self {
            wifi: WifiScan {
                status: DeviceStatus::NotFound,
                vendor: None,
            },
            bluetooth: BluetoothScan {
                status: DeviceStatus::NotFound,
                vendor: None,
            },
            audio_label: "Audio".to_string(),
            is_laptop: false,
        }
    }
}

// ============================================================================
// Pure Classifiers
// ============================================================================

/// Classify the Wi-Fi card from four captured probes, in priority order:
/// native Broadcom node, Intel firmware strings, USB adapters, PCI/USB
/// vendor-id fallback.
pub fn classify_wifi(
    bcm_wlan: &str,
    network_profile: &str,
    usb_profile: &str,
    bus_sweep: &str,
) -> WifiScan {
    if bcm_wlan.contains("vendor-id") {
        return WifiScan {
            status: DeviceStatus::Compatible("Broadcom (Native/Kext)".to_string()),
            vendor: Some(WifiVendor::Broadcom),
        };
    }

    if network_profile.contains("Wi-Fi")
        && (network_profile.contains("itlwm") || network_profile.contains("Intel"))
    {
        return WifiScan {
            status: DeviceStatus::Compatible("Intel Wireless".to_string()),
            vendor: Some(WifiVendor::Intel),
        };
    }

    if usb_profile.contains("Realtek") {
        return WifiScan {
            status: DeviceStatus::Compatible("USB Wi-Fi (Realtek)".to_string()),
            vendor: Some(WifiVendor::RealtekUsb),
        };
    }
    if usb_profile.contains("Mediatek") || usb_profile.contains("Ralink") {
        return WifiScan {
            status: DeviceStatus::Compatible("USB Wi-Fi (Mediatek)".to_string()),
            vendor: Some(WifiVendor::MediatekUsb),
        };
    }
    if usb_profile.contains("802.11") {
        return WifiScan {
            status: DeviceStatus::Compatible("USB Wi-Fi (Generic)".to_string()),
            vendor: Some(WifiVendor::GenericUsb),
        };
    }

    // PCI vendor ids: 8086 Intel, 14e4 Broadcom
    if bus_sweep.contains("8086") {
        return WifiScan {
            status: DeviceStatus::Compatible("Intel Wi-Fi".to_string()),
            vendor: Some(WifiVendor::Intel),
        };
    }
    if bus_sweep.contains("14e4") {
        return WifiScan {
            status: DeviceStatus::Compatible("Broadcom Wi-Fi".to_string()),
            vendor: Some(WifiVendor::Broadcom),
        };
    }

    WifiScan {
        status: DeviceStatus::NotFound,
        vendor: None,
    }
}

/// Classify the Bluetooth controller from the USB device tree, falling back
/// to the Bluetooth profiler output for generic controllers.
pub fn classify_bluetooth(usb_profile: &str, bt_profile: &str) -> BluetoothScan {
    if usb_profile.contains("Intel") {
        return BluetoothScan {
            status: DeviceStatus::Compatible("Intel Bluetooth".to_string()),
            vendor: Some(BluetoothVendor::Intel),
        };
    }
    if usb_profile.contains("Broadcom") {
        return BluetoothScan {
            status: DeviceStatus::Compatible("Broadcom Bluetooth".to_string()),
            vendor: Some(BluetoothVendor::Broadcom),
        };
    }
    if usb_profile.contains("Realtek") {
        return BluetoothScan {
            status: DeviceStatus::Incompatible("Realtek BT (Internal - Unsupported)".to_string()),
            vendor: Some(BluetoothVendor::RealtekInternal),
        };
    }
    if usb_profile.contains("CSR") || usb_profile.contains("Cambridge") {
        return BluetoothScan {
            status: DeviceStatus::Compatible("USB BT (CSR/Generic)".to_string()),
            vendor: Some(BluetoothVendor::CsrGeneric),
        };
    }

    if bt_profile.contains("Address") {
        return BluetoothScan {
            status: DeviceStatus::Compatible("Generic Bluetooth".to_string()),
            vendor: Some(BluetoothVendor::CsrGeneric),
        };
    }

    BluetoothScan {
        status: DeviceStatus::NotFound,
        vendor: None,
    }
}

/// Audio fix button label from the HDA codec vendor id (0x10ec is Realtek)
pub fn audio_label(codec_dump: &str) -> String {
    let vendor_line = codec_dump
        .lines()
        .find(|line| line.contains("VendorID"))
        .unwrap_or("");
    if vendor_line.contains("10ec") {
        "Realtek Audio".to_string()
    } else if let Some(id) = vendor_line.split_whitespace().last().filter(|s| s.starts_with("0x")) {
        format!("Audio ({})", id)
    } else {
        "Audio (Unknown)".to_string()
    }
}

/// Laptops report model identifiers like "MacBookPro16,1"
pub fn is_laptop(hw_model: &str) -> bool {
    hw_model.contains("Book")
}

// ============================================================================
// Tests
// ============================================================================
