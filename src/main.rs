//! HackinTune - Main entry point
//!
//! Budget-tiered Hackintosh build recommendations, OpenCore EFI generation,
//! and post-install fixes, as a TUI with headless subcommands.

mod app;
mod audit;
mod cli;
mod command_executor;
mod config_edit;
mod efi;
mod error;
mod esp;
mod hardware;
mod logic;
mod smbios;
mod theme;
mod tiers;
mod types;
mod ui;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;

use crate::audit::{run_validation, AuditReport};
use crate::cli::{Cli, Commands, EfiToolCommands, ToolCommands};
use crate::command_executor::{run_command, CommandType};
use crate::esp::EspState;
use crate::logic::{postinstall, preinstall};
use crate::smbios::generate_identity;

/// Initialize the logger with appropriate settings
fn init_logger() {
    use env_logger::Builder;
    use std::io::Write;

    Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Info)
        .parse_default_env() // Allows RUST_LOG env var to override
        .init();
}

/// Main application entry point
fn main() -> anyhow::Result<()> {
    init_logger();
    info!("HackinTune starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Recommend { budget, seed, json }) => {
            let rec = preinstall::recommend(&preinstall::RecommendRequest { budget, seed });
            if json {
                println!("{}", serde_json::to_string_pretty(&rec)?);
            } else {
                print_recommendation(&rec);
            }
        }
        Some(Commands::Generate {
            budget,
            output,
            open,
        }) => {
            let generated = preinstall::build_artifacts(budget, output)?;
            println!("EFI package written to {}", generated.dir.display());
            println!("  {}", generated.bios_settings.display());
            println!("  {}", generated.config_plist.display());
            if open {
                run_command(&CommandType::Open(
                    generated.dir.to_string_lossy().into_owned(),
                ))
                .map_err(error::HackinTuneError::command)?;
            }
        }
        Some(Commands::Audit) => {
            println!("{}", AuditReport::collect().render());
        }
        Some(Commands::Validate) => {
            let report = run_validation();
            println!("{}", report.render());
            if !report.is_healthy() {
                std::process::exit(1);
            }
        }
        Some(Commands::Smbios { model, seed }) => {
            let identity = match seed {
                Some(seed) => generate_identity(&model, &mut StdRng::seed_from_u64(seed)),
                None => generate_identity(&model, &mut rand::thread_rng()),
            };
            println!("Model:        {}", identity.model);
            println!("Serial:       {}", identity.serial);
            println!("Board Serial: {}", identity.board_serial);
            println!("SmUUID:       {}", identity.uuid);
        }
        Some(Commands::Tools { tool }) => {
            run_tool_command(&tool)?;
        }
        None => {
            info!("No command specified, launching TUI");
            run_tui()?;
        }
    }

    Ok(())
}

fn print_recommendation(rec: &preinstall::Recommendation) {
    println!("Tier: {} (budget Rs. {})", rec.tier_name, rec.budget);
    println!();
    for part in &rec.parts {
        match part.tag {
            Some(tag) => println!("  {:<12} {:<42} [{}]", part.category.to_string(), part.name, tag),
            None => println!("  {:<12} {}", part.category.to_string(), part.name),
        }
    }
}

/// Run the interactive TUI
fn run_tui() -> anyhow::Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = app::App::new();
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if the app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result.map_err(Into::into)
}

/// Resolve the mounted config.plist or fail with a mount hint.
fn mounted_config() -> anyhow::Result<std::path::PathBuf> {
    EspState::probe().config_plist().ok_or_else(|| {
        anyhow::anyhow!("no mounted OpenCore config.plist found, run `hackintune tools efi mount` first")
    })
}

/// Run a headless tool command
fn run_tool_command(tool: &ToolCommands) -> anyhow::Result<()> {
    match tool {
        ToolCommands::Efi { efi_tool } => match efi_tool {
            EfiToolCommands::Status => {
                let esp = EspState::probe();
                match &esp.oc_dir {
                    Some(dir) => println!("Mounted: {}", dir.display()),
                    None => println!("Not mounted"),
                }
                if esp.partitions.is_empty() {
                    println!("No EFI partitions found");
                } else {
                    println!("EFI partitions: {}", esp.partitions.join(", "));
                }
            }
            EfiToolCommands::Mount { identifier } => {
                let esp = match identifier {
                    Some(id) => EspState::mount(id)?,
                    None => EspState::auto_mount()?,
                };
                match esp.oc_dir {
                    Some(dir) => println!("Mounted: {}", dir.display()),
                    None => println!("Mounted, but no OpenCore directory found"),
                }
            }
            EfiToolCommands::Backup => {
                let archive = EspState::probe().backup()?;
                println!("Backup written to {}", archive.display());
            }
            EfiToolCommands::BootArgs { set } => {
                let config = mounted_config()?;
                match set {
                    Some(args) => {
                        config_edit::write_boot_args(&config, args)?;
                        println!("boot-args set to '{}'", args);
                    }
                    None => println!("{}", config_edit::read_boot_args(&config)?),
                }
            }
            EfiToolCommands::InstallTheme => {
                let config = mounted_config()?;
                let oc_dir = config
                    .parent()
                    .ok_or_else(|| anyhow::anyhow!("unexpected config.plist location"))?;
                let outcome = postinstall::install_oc_theme(oc_dir)?;
                println!("{}", outcome);
            }
            EfiToolCommands::InjectKext { name, url } => {
                let config = mounted_config()?;
                let oc_dir = config
                    .parent()
                    .ok_or_else(|| anyhow::anyhow!("unexpected config.plist location"))?;
                let outcome = postinstall::inject_kext(oc_dir, name, url)?;
                println!("{}", outcome);
            }
        },
        ToolCommands::KextUpdates => {
            for (kext, tag) in postinstall::check_kext_updates() {
                println!("{:<16} {}", kext, tag);
            }
        }
        ToolCommands::FixAudio => {
            let outcome = postinstall::fix_audio(&mounted_config()?)?;
            println!("{}", outcome);
        }
        ToolCommands::TrimToggle => {
            let outcome = postinstall::toggle_trim(&mounted_config()?)?;
            println!("{}", outcome);
        }
        ToolCommands::Optimize => {
            for outcome in postinstall::smart_optimize(&mounted_config()?)? {
                println!("{}", outcome);
            }
        }
        ToolCommands::FreezeScan => {
            println!("{}", postinstall::analyze_freeze());
        }
    }
    Ok(())
}
