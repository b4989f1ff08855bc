//! System audit and validation
//!
//! The deep audit renders a hardware/identity report from captured command
//! output; validation produces a typed issue list with remedies. Every field
//! comes out of one command capture through a pure extractor, so the report
//! logic tests against canned fixtures.

#![allow(dead_code)]

use crate::command_executor::{run_command, CommandType};
use std::fmt;
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

// ============================================================================
// Field Extractors
// ============================================================================

/// First `Label: value` line matching `label`, value part trimmed.
pub fn extract_field(output: &str, label: &str) -> Option<String> {
    output
        .lines()
        .find(|line| line.contains(label))
        .and_then(|line| line.split_once(": "))
        .map(|(_, value)| value.trim().to_string())
}

/// `board-id` from an `ioreg -l` dump: the fourth quote-delimited field of
/// the matching line (`"board-id" = <"Mac-CFF7D910A743CAAF">`).
pub fn extract_board_id(ioreg_dump: &str) -> Option<String> {
    ioreg_dump
        .lines()
        .find(|line| line.contains("board-id"))
        .and_then(|line| line.split('"').nth(3))
        .map(str::to_string)
}

/// `hw.memsize` bytes rendered as whole gigabytes.
pub fn memsize_gb(sysctl_out: &str) -> Option<String> {
    let bytes: u64 = sysctl_out.trim().parse().ok()?;
    Some(format!("{} GB", bytes / 1_073_741_824))
}

/// TRIM state from the storage profiler ("TRIM Support: Yes").
pub fn trim_enabled(storage_profile: &str) -> bool {
    extract_field(storage_profile, "TRIM Support")
        .map(|v| v.starts_with("Yes"))
        .unwrap_or(false)
}

/// S.M.A.R.T. verdict from the NVMe/storage profiler output. macOS reports
/// "Verified" for a healthy drive; anything else warrants a closer look.
pub fn ssd_health(storage_profile: &str) -> &'static str {
    if storage_profile.contains("Verified") {
        "Verified (Healthy)"
    } else {
        "Check Required"
    }
}

/// SIP state from `csrutil status`.
pub fn sip_disabled(csrutil_out: &str) -> bool {
    csrutil_out.contains("disabled")
}

/// Hibernation already tuned for desktop Hackintosh use.
pub fn power_management_optimal(pmset_out: &str) -> bool {
    pmset_out.contains("hibernatemode 0")
}

/// Hardware port names from `networksetup -listallhardwareports`.
pub fn hardware_port_names(networksetup_out: &str) -> Vec<String> {
    networksetup_out
        .lines()
        .filter(|line| line.starts_with("Hardware Port:"))
        .filter_map(|line| line.split_once(": "))
        .map(|(_, name)| name.trim().to_string())
        .collect()
}

// ============================================================================
// Deep Audit
// ============================================================================

/// Snapshot of everything the deep audit reports
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub model: String,
    pub serial: String,
    pub board_id: String,
    pub macos_version: String,
    pub macos_build: String,
    pub cpu: String,
    pub gpu: String,
    pub vram: String,
    pub ram_size: String,
    pub ram_speed: String,
    pub trim: String,
    pub ssd_health: String,
    pub audio: String,
    pub network: String,
}

impl AuditReport {
    /// Probe the host for every field. Failed probes leave the field empty
    /// and the report renders what it has.
    pub fn collect() -> Self {
        let capture = |ct: CommandType| run_command(&ct).unwrap_or_default();

        let hardware = capture(CommandType::SystemProfiler("SPHardwareDataType".to_string()));
        let displays = capture(CommandType::SystemProfiler("SPDisplaysDataType".to_string()));
        let memory = capture(CommandType::SystemProfiler("SPMemoryDataType".to_string()));
        let storage = capture(CommandType::SystemProfiler("SPStorageDataType".to_string()));
        let nvme = capture(CommandType::SystemProfiler("SPNVMeDataType".to_string()));
        let audio = capture(CommandType::SystemProfiler("SPAudioDataType".to_string()));
        let ioreg = capture(CommandType::IoregAll);
        let ports = capture(CommandType::NetworksetupPorts);

        Self {
            model: capture(CommandType::Sysctl("hw.model".to_string())),
            serial: extract_field(&hardware, "Serial Number").unwrap_or_default(),
            board_id: extract_board_id(&ioreg).unwrap_or_default(),
            macos_version: capture(CommandType::SwVers("-productVersion".to_string())),
            macos_build: capture(CommandType::SwVers("-buildVersion".to_string())),
            cpu: capture(CommandType::Sysctl("machdep.cpu.brand_string".to_string())),
            gpu: extract_field(&displays, "Chipset Model").unwrap_or_default(),
            vram: extract_field(&displays, "VRAM").unwrap_or_default(),
            ram_size: memsize_gb(&capture(CommandType::Sysctl("hw.memsize".to_string())))
                .unwrap_or_default(),
            ram_speed: extract_field(&memory, "Speed").unwrap_or_default(),
            trim: extract_field(&storage, "TRIM Support").unwrap_or_default(),
            ssd_health: ssd_health(&format!("{}\n{}", nvme, storage)).to_string(),
            audio: extract_field(&audio, "Default Output Device")
                .or_else(|| audio.lines().nth(2).map(|l| l.trim().to_string()))
                .unwrap_or_else(|| "No Devices Found".to_string()),
            network: hardware_port_names(&ports).join(", "),
        }
    }

    /// Render the audit as the text block the TUI and CLI display.
    pub fn render(&self) -> String {
        format!(
            "DEEP SYSTEM HARDWARE AUDIT\n\
             ==========================\n\
             \n\
             [SYSTEM IDENTITY]\n\
             * Model:        {}\n\
             * Serial:       {}\n\
             * Board ID:     {}\n\
             * macOS:        {} ({})\n\
             \n\
             [PROCESSOR]\n\
             * CPU:          {}\n\
             \n\
             [GRAPHICS]\n\
             * GPU:          {}\n\
             * VRAM:         {}\n\
             \n\
             [MEMORY]\n\
             * RAM Size:     {}\n\
             * Speed:        {}\n\
             \n\
             [STORAGE]\n\
             * TRIM:         {}\n\
             * S.M.A.R.T.:   {}\n\
             \n\
             [PERIPHERALS]\n\
             * Audio:        {}\n\
             * Network:      {}",
            self.model,
            self.serial,
            self.board_id,
            self.macos_version,
            self.macos_build,
            self.cpu,
            self.gpu,
            self.vram,
            self.ram_size,
            self.ram_speed,
            self.trim,
            self.ssd_health,
            self.audio,
            self.network,
        )
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Issues the validation pass can raise, each with a remedy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    NetworkOffline,
    TrimDisabled,
    SipEnabled,
}

impl ValidationIssue {
    pub fn description(&self) -> &'static str {
        match self {
            Self::NetworkOffline => "Network Offline",
            Self::TrimDisabled => "TRIM Disabled (SSD Speed/Life Risk)",
            Self::SipEnabled => "SIP Enabled (May block unsigned Kexts)",
        }
    }

    pub fn remedy(&self) -> &'static str {
        match self {
            Self::NetworkOffline => "Check cables or Wi-Fi kexts, then reset the interface.",
            Self::TrimDisabled => {
                "Enable the ThirdPartyDrives quirk (Toggle TRIM) and reboot."
            }
            Self::SipEnabled => {
                "SIP cannot be disabled from the OS. Boot into Recovery -> Terminal -> 'csrutil disable'."
            }
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Outcome of the three validation checks
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationReport {
    pub network_online: bool,
    pub trim_enabled: bool,
    pub sip_disabled: bool,
}

impl ValidationReport {
    pub fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if !self.network_online {
            issues.push(ValidationIssue::NetworkOffline);
        }
        if !self.trim_enabled {
            issues.push(ValidationIssue::TrimDisabled);
        }
        if !self.sip_disabled {
            issues.push(ValidationIssue::SipEnabled);
        }
        issues
    }

    pub fn is_healthy(&self) -> bool {
        self.issues().is_empty()
    }

    pub fn render(&self) -> String {
        let mark = |ok: bool, yes: &str, no: &str| if ok { yes.to_string() } else { no.to_string() };
        let mut out = format!(
            "VALIDATION REPORT\n\
             -----------------\n\
             Network: {}\n\
             TRIM:    {}\n\
             SIP:     {}",
            mark(self.network_online, "Online", "Offline"),
            mark(self.trim_enabled, "Enabled", "Disabled"),
            mark(self.sip_disabled, "Disabled (Good)", "Enabled (Caution)"),
        );
        let issues = self.issues();
        if issues.is_empty() {
            out.push_str("\n\nNo critical issues found.");
        } else {
            out.push_str("\n\nIssues Found:");
            for issue in issues {
                out.push_str(&format!("\n- {}\n  Fix: {}", issue.description(), issue.remedy()));
            }
        }
        out
    }
}

/// TCP reachability check with a short timeout. ICMP is often filtered, so
/// this connects to a public HTTPS endpoint instead of shelling out to ping.
pub fn check_connectivity() -> bool {
    let addr: SocketAddr = match "1.1.1.1:443".parse() {
        Ok(a) => a,
        Err(e) => {
            log::warn!("Failed to parse probe address: {}", e);
            return false;
        }
    };
    match TcpStream::connect_timeout(&addr, Duration::from_secs(5)) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Connectivity check failed: {}", e);
            false
        }
    }
}

/// Run all validation checks against the live host.
pub fn run_validation() -> ValidationReport {
    let storage = run_command(&CommandType::SystemProfiler("SPStorageDataType".to_string()))
        .unwrap_or_default();
    let csrutil = run_command(&CommandType::CsrutilStatus).unwrap_or_default();

    let report = ValidationReport {
        network_online: check_connectivity(),
        trim_enabled: trim_enabled(&storage),
        sip_disabled: sip_disabled(&csrutil),
    };
    log::info!(
        "Validation: network={}, trim={}, sip_disabled={}",
        report.network_online,
        report.trim_enabled,
        report.sip_disabled
    );
    report
}

// ============================================================================
// Tests
// ============================================================================
