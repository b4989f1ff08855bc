use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// HackinTune - budget-tiered Hackintosh builder and post-install toolkit
#[derive(Parser)]
#[command(name = "hackintune")]
#[command(about = "Budget-tiered Hackintosh build recommendations, EFI generation, and post-install fixes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the recommended build for a budget
    Recommend {
        /// Budget in INR
        #[arg(short, long)]
        budget: u32,
        /// Seed for the slot alternative picks (reproducible output)
        #[arg(short, long)]
        seed: Option<u64>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Generate BIOS instructions and an OpenCore config.plist for a budget
    Generate {
        /// Budget in INR
        #[arg(short, long)]
        budget: u32,
        /// Output directory (defaults to the Desktop)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Open the generated folder when done
        #[arg(long)]
        open: bool,
    },
    /// Print the deep system hardware audit
    Audit,
    /// Check network, TRIM, and SIP health
    Validate,
    /// Generate an SMBIOS identity (serial, MLB, SmUUID)
    Smbios {
        /// SMBIOS product name
        #[arg(short, long, default_value = "iMac20,1")]
        model: String,
        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Post-install tools for a mounted OpenCore setup
    Tools {
        #[command(subcommand)]
        tool: ToolCommands,
    },
}

#[derive(Subcommand)]
pub enum ToolCommands {
    /// EFI partition and config.plist tools
    Efi {
        #[command(subcommand)]
        efi_tool: EfiToolCommands,
    },
    /// Check upstream kext releases
    KextUpdates,
    /// Inject alcid=1 into boot-args
    FixAudio,
    /// Flip the ThirdPartyDrives kernel quirk
    TrimToggle,
    /// Apply hibernation, TRIM, and APFS timeout fixes as needed
    Optimize,
    /// Classify recent kernel panics from the system log
    FreezeScan,
}

#[derive(Subcommand)]
pub enum EfiToolCommands {
    /// Show mount state and EFI partition identifiers
    Status,
    /// Mount an EFI partition (first found when no identifier given)
    Mount {
        /// Partition identifier (e.g. disk0s1)
        #[arg(short, long)]
        identifier: Option<String>,
    },
    /// Zip the mounted EFI folder to ~/Documents/Hackintosh_Backups
    Backup,
    /// Read or replace boot-args on the mounted config.plist
    BootArgs {
        /// New boot-args value (prints the current value when omitted).
        /// Values usually start with a hyphen ("-v keepsyms=1 ...").
        #[arg(short, long, allow_hyphen_values = true)]
        set: Option<String>,
    },
    /// Install the OpenCanopy icon/theme pack into Resources
    InstallTheme,
    /// Download a kext archive and register it in Kernel:Add
    InjectKext {
        /// Kext name used for the staging archive
        #[arg(short, long)]
        name: String,
        /// Archive URL (.zip containing the .kext bundle)
        #[arg(short, long)]
        url: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
