//! command_executor.rs - Typed wrappers around the host commands HackinTune drives.
//!
//! Every external collaborator (`system_profiler`, `ioreg`, `sysctl`, `sw_vers`,
//! `csrutil`, `pmset`, `diskutil`, `networksetup`, `zip`, `unzip`, `curl`, `open`)
//! is expressed as a `CommandType` variant and executed through one capture
//! helper. All parsing of the returned text lives in the pure modules
//! (`hardware`, `audit`, `esp`, `logic`), so those stay unit-testable without
//! a macOS host. Blocking calls run on worker threads spawned by the app, never
//! on the TUI event loop.

use log::debug;
use std::process::Command;

/// Represents the type of host command to be executed.
#[derive(Debug, Clone)]
pub enum CommandType {
    /// `system_profiler <data-type>` (e.g. SPUSBDataType, SPDisplaysDataType)
    SystemProfiler(String),
    /// `sysctl -n <key>` (hw.model, hw.memsize, machdep.cpu.brand_string)
    Sysctl(String),
    /// `sw_vers <flag>` (-productVersion, -buildVersion)
    SwVers(String),
    /// `ioreg -r -x -n <node>` (AppleBCMWLANCore, IOHDACodecDevice)
    IoregNode(String),
    /// `ioreg -p IOUSB -p IOPCI` vendor-id sweep
    IoregBusSweep,
    /// `ioreg -l` full registry dump (board-id lookup)
    IoregAll,
    /// `diskutil list`
    DiskutilList,
    /// `diskutil mount <identifier>`
    DiskutilMount(String),
    /// `csrutil status`
    CsrutilStatus,
    /// `pmset -g`
    PmsetStatus,
    /// `pmset -a hibernatemode <mode>`
    PmsetHibernateMode(u8),
    /// `networksetup -listallhardwareports`
    NetworksetupPorts,
    /// `log show` filtered to panic messages from the last 12 hours
    LogShowPanics,
    /// `zip -r -q <archive> <source>` executed inside `cwd`
    Zip {
        archive: String,
        source: String,
        cwd: String,
    },
    /// `unzip -q -o <archive> -d <dest>`
    Unzip { archive: String, dest: String },
    /// `curl -sL <url>`, body on stdout (GitHub release lookups)
    CurlFetch(String),
    /// `curl -sL -o <dest> <url>` (kext downloads)
    CurlDownload { url: String, dest: String },
    /// `open <target>` (Finder reveal, retail search URLs)
    Open(String),
}

impl CommandType {
    fn build(&self) -> Command {
        match self {
            Self::SystemProfiler(data_type) => {
                let mut cmd = Command::new("system_profiler");
                cmd.arg(data_type);
                cmd
            }
            Self::Sysctl(key) => {
                let mut cmd = Command::new("sysctl");
                cmd.args(["-n", key]);
                cmd
            }
            Self::SwVers(flag) => {
                let mut cmd = Command::new("sw_vers");
                cmd.arg(flag);
                cmd
            }
            Self::IoregNode(node) => {
                let mut cmd = Command::new("ioreg");
                cmd.args(["-r", "-x", "-n", node]);
                cmd
            }
            Self::IoregBusSweep => {
                let mut cmd = Command::new("ioreg");
                cmd.args(["-p", "IOUSB", "-p", "IOPCI"]);
                cmd
            }
            Self::IoregAll => {
                let mut cmd = Command::new("ioreg");
                cmd.arg("-l");
                cmd
            }
            Self::DiskutilList => {
                let mut cmd = Command::new("diskutil");
                cmd.arg("list");
                cmd
            }
            Self::DiskutilMount(identifier) => {
                let mut cmd = Command::new("diskutil");
                cmd.args(["mount", identifier]);
                cmd
            }
            Self::CsrutilStatus => {
                let mut cmd = Command::new("csrutil");
                cmd.arg("status");
                cmd
            }
            Self::PmsetStatus => {
                let mut cmd = Command::new("pmset");
                cmd.arg("-g");
                cmd
            }
            Self::PmsetHibernateMode(mode) => {
                let mut cmd = Command::new("pmset");
                cmd.args(["-a", "hibernatemode"]);
                cmd.arg(mode.to_string());
                cmd
            }
            Self::NetworksetupPorts => {
                let mut cmd = Command::new("networksetup");
                cmd.arg("-listallhardwareports");
                cmd
            }
            Self::LogShowPanics => {
                let mut cmd = Command::new("log");
                cmd.args([
                    "show",
                    "--predicate",
                    "eventMessage contains \"panic\"",
                    "--last",
                    "12h",
                    "--style",
                    "compact",
                ]);
                cmd
            }
            Self::Zip {
                archive,
                source,
                cwd,
            } => {
                let mut cmd = Command::new("zip");
                cmd.args(["-r", "-q", archive, source]);
                cmd.current_dir(cwd);
                cmd
            }
            Self::Unzip { archive, dest } => {
                let mut cmd = Command::new("unzip");
                cmd.args(["-q", "-o", archive, "-d", dest]);
                cmd
            }
            Self::CurlFetch(url) => {
                let mut cmd = Command::new("curl");
                cmd.args(["-sL", url]);
                cmd
            }
            Self::CurlDownload { url, dest } => {
                let mut cmd = Command::new("curl");
                cmd.args(["-sL", "-o", dest, url]);
                cmd
            }
            Self::Open(target) => {
                let mut cmd = Command::new("open");
                cmd.arg(target);
                cmd
            }
        }
    }
}

/// Execute a host command and capture its trimmed stdout.
///
/// Commands whose grep targets are absent on the host (a missing ioreg node,
/// an unmatched profiler section) still exit zero with empty output; callers
/// treat an empty `Ok` as "not found" rather than an error.
pub fn run_command(command_type: &CommandType) -> Result<String, String> {
    debug!("Executing command: {:?}", command_type);
    let output = command_type
        .build()
        .output()
        .map_err(|e| format!("{:?}: {}", command_type, e))?;
    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(String::from_utf8_lossy(&output.stderr).trim().to_string())
    }
}
