//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct, worker dispatch, and event loop
//!
//! # Threading
//!
//! Everything that shells out (hardware probes, diskutil, curl) runs on a
//! worker thread and reports back over an mpsc channel, so the draw loop
//! never blocks. Workers get the data they need cloned up front and never
//! touch `AppState` directly.

mod state;

pub use state::{AppMode, AppState};

use crate::audit::{run_validation, AuditReport};
use crate::command_executor::{run_command, CommandType};
use crate::efi::smbios_for_budget;
use crate::error::Result;
use crate::esp::EspState;
use crate::hardware::HardwareScan;
use crate::logic::postinstall::{
    self, AIRPORT_ITLWM_URL, INTEL_BLUETOOTH_URL, USB_WIFI_REPO_URL, VIRTUAL_SMC_URL,
};
use crate::logic::preinstall::{self, RecommendRequest};
use crate::smbios::generate_identity;
use crate::ui::UiRenderer;

use crossterm::event::{Event, KeyCode, KeyEvent};
use log::{debug, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

/// Main menu entries, in display order
pub const MAIN_MENU_ITEMS: [&str; 5] = [
    "Build a Hackintosh (budget tiers)",
    "Post-Install Tools",
    "Deep System Audit",
    "Validate Setup",
    "Quit",
];

/// Post-install tools menu entries, in display order
pub const TOOL_MENU_ITEMS: [&str; 13] = [
    "Mount EFI Partition",
    "Backup EFI to Documents",
    "Fix Audio (alcid=1)",
    "Toggle TRIM (ThirdPartyDrives)",
    "Smart Optimization",
    "Analyze Freezes (kernel panics)",
    "Check Kext Updates",
    "Inject Intel Wi-Fi Kext",
    "Inject Intel Bluetooth Kext",
    "Fix Laptop Battery (VirtualSMC)",
    "Install OpenCanopy Theme",
    "USB Wi-Fi Adapter Drivers (browser)",
    "Generate SMBIOS Identity",
];

/// Messages sent from worker threads to the main UI thread
#[derive(Debug)]
pub enum AppMessage {
    /// Startup hardware probe finished
    HardwareScanned(HardwareScan),
    /// EFI partition probe or mount finished
    EspProbed(EspState),
    /// A tool produced a text report for the output screen
    Report { title: String, lines: Vec<String> },
    /// One-line feedback for the status bar
    Status(String),
}

/// Main application struct
pub struct App {
    state: AppState,
    renderer: UiRenderer,
    /// Channel sender for worker output (cloned to threads)
    tx: Sender<AppMessage>,
    /// Channel receiver polled in the main loop
    rx: Receiver<AppMessage>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application instance and kick off the startup scan.
    pub fn new() -> Self {
        info!("Creating new App instance");
        let (tx, rx) = mpsc::channel();
        let app = Self {
            state: AppState::default(),
            renderer: UiRenderer::new(),
            tx,
            rx,
        };
        app.spawn_startup_scan();
        app
    }

    fn spawn_startup_scan(&self) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let scan = HardwareScan::detect();
            let _ = tx.send(AppMessage::HardwareScanned(scan));
            let _ = tx.send(AppMessage::EspProbed(EspState::probe()));
        });
    }

    /// Run the main application loop.
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        info!("Starting main application loop");

        loop {
            self.poll_messages();

            if crossterm::event::poll(Duration::from_millis(100))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if self.handle_key_event(key_event) {
                        break;
                    }
                }
            }

            terminal.draw(|f| self.renderer.render(f, &self.state))?;
        }

        Ok(())
    }

    /// Drain pending worker messages without blocking.
    fn poll_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                AppMessage::HardwareScanned(scan) => {
                    self.state.status_message = format!("Hardware scan: {}", scan.summary());
                    self.state.hardware = Some(scan);
                }
                AppMessage::EspProbed(esp) => {
                    self.state.status_message = if esp.is_mounted() {
                        "EFI partition mounted".to_string()
                    } else if esp.partitions.is_empty() {
                        "No EFI partition found".to_string()
                    } else {
                        format!("EFI partitions available: {}", esp.partitions.join(", "))
                    };
                    self.state.esp = esp;
                    self.state.working = false;
                }
                AppMessage::Report { title, lines } => {
                    self.state.working = false;
                    self.state.show_output(title, lines);
                }
                AppMessage::Status(message) => {
                    self.state.working = false;
                    self.state.status_message = message;
                }
            }
        }
    }

    /// Handle a key event. Returns true when the app should exit.
    fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        debug!("Key event: {:?} in {:?}", key_event.code, self.state.mode);
        match self.state.mode {
            AppMode::MainMenu => self.handle_main_menu_key(key_event.code),
            AppMode::Builder => {
                self.handle_builder_key(key_event.code);
                false
            }
            AppMode::PostInstall => {
                self.handle_tools_key(key_event.code);
                false
            }
            AppMode::Output => {
                self.handle_output_key(key_event.code);
                false
            }
        }
    }

    fn handle_main_menu_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.main_menu_selection = self.state.main_menu_selection.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.main_menu_selection =
                    (self.state.main_menu_selection + 1).min(MAIN_MENU_ITEMS.len() - 1);
            }
            KeyCode::Enter => return self.handle_main_menu_selection(),
            KeyCode::Char('q') | KeyCode::Esc => return true,
            _ => {}
        }
        false
    }

    fn handle_main_menu_selection(&mut self) -> bool {
        match self.state.main_menu_selection {
            0 => {
                self.refresh_recommendation();
                self.state.mode = AppMode::Builder;
            }
            1 => self.state.mode = AppMode::PostInstall,
            2 => self.spawn_audit(),
            3 => self.spawn_validation(),
            _ => return true,
        }
        false
    }

    fn handle_builder_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.state.step_budget(false);
                self.refresh_recommendation();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.state.step_budget(true);
                self.refresh_recommendation();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.part_selection = self.state.part_selection.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self
                    .state
                    .recommendation
                    .as_ref()
                    .map(|r| r.parts.len().saturating_sub(1))
                    .unwrap_or(0);
                self.state.part_selection = (self.state.part_selection + 1).min(last);
            }
            KeyCode::Char('r') => self.refresh_recommendation(),
            KeyCode::Enter => self.open_part_search(),
            KeyCode::Char('g') => self.generate_artifacts(),
            KeyCode::Esc => self.state.mode = AppMode::MainMenu,
            _ => {}
        }
    }

    fn handle_tools_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.tools_menu_selection = self.state.tools_menu_selection.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.tools_menu_selection =
                    (self.state.tools_menu_selection + 1).min(TOOL_MENU_ITEMS.len() - 1);
            }
            KeyCode::Enter => self.handle_tool_selection(),
            KeyCode::Esc => self.state.mode = AppMode::MainMenu,
            _ => {}
        }
    }

    fn handle_output_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.output_scroll = self.state.output_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.state.output_lines.len().saturating_sub(1);
                self.state.output_scroll = (self.state.output_scroll + 1).min(last);
            }
            KeyCode::Esc | KeyCode::Enter => self.state.mode = self.state.return_mode,
            _ => {}
        }
    }

    // ========================================================================
    // Builder actions
    // ========================================================================

    fn refresh_recommendation(&mut self) {
        let rec = preinstall::recommend(&RecommendRequest {
            budget: self.state.budget,
            seed: None,
        });
        self.state.part_selection = self
            .state
            .part_selection
            .min(rec.parts.len().saturating_sub(1));
        self.state.status_message = format!("Tier: {}", rec.tier_name);
        self.state.recommendation = Some(rec);
    }

    fn open_part_search(&mut self) {
        let Some(part) = self
            .state
            .recommendation
            .as_ref()
            .and_then(|r| r.parts.get(self.state.part_selection))
        else {
            return;
        };
        let url = preinstall::search_url(part);
        self.state.status_message = match run_command(&CommandType::Open(url)) {
            Ok(_) => format!("Opened search for {}", part.name),
            Err(e) => format!("Could not open browser: {}", e),
        };
    }

    fn generate_artifacts(&mut self) {
        match preinstall::build_artifacts(self.state.budget, None) {
            Ok(generated) => {
                self.state.status_message =
                    format!("EFI package written to {}", generated.dir.display());
            }
            Err(e) => self.state.status_message = format!("Generation failed: {}", e),
        }
    }

    // ========================================================================
    // Tool dispatch
    // ========================================================================

    fn handle_tool_selection(&mut self) {
        if self.state.working {
            self.state.status_message = "A tool is already running".to_string();
            return;
        }
        match self.state.tools_menu_selection {
            0 => self.spawn_mount(),
            1 => self.spawn_backup(),
            2 => self.spawn_config_fix("Fix Audio", postinstall::fix_audio),
            3 => self.spawn_config_fix("Toggle TRIM", postinstall::toggle_trim),
            4 => self.spawn_smart_optimize(),
            5 => self.spawn_freeze_scan(),
            6 => self.spawn_kext_update_check(),
            7 => self.spawn_kext_injection("AirportItlwm", AIRPORT_ITLWM_URL),
            8 => self.spawn_kext_injection("IntelBluetoothFirmware", INTEL_BLUETOOTH_URL),
            9 => self.spawn_battery_fix(),
            10 => self.spawn_theme_install(),
            11 => self.open_usb_wifi_page(),
            _ => self.show_smbios_identity(),
        }
    }

    /// Config path guard shared by the fixes that edit a mounted config.plist.
    fn mounted_config(&mut self) -> Option<PathBuf> {
        match self.state.esp.config_plist() {
            Some(path) => Some(path),
            None => {
                self.state.status_message =
                    "Mount the EFI partition first (no config.plist found)".to_string();
                None
            }
        }
    }

    fn spawn_worker<F>(&mut self, status: &str, work: F)
    where
        F: FnOnce() -> AppMessage + Send + 'static,
    {
        self.state.working = true;
        self.state.status_message = status.to_string();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let _ = tx.send(work());
        });
    }

    fn spawn_mount(&mut self) {
        self.spawn_worker("Mounting EFI partition...", || match EspState::auto_mount() {
            Ok(esp) => AppMessage::EspProbed(esp),
            Err(e) => AppMessage::Status(format!("Mount failed: {}", e)),
        });
    }

    fn spawn_backup(&mut self) {
        let esp = self.state.esp.clone();
        self.spawn_worker("Backing up EFI folder...", move || match esp.backup() {
            Ok(archive) => AppMessage::Status(format!("Backup written to {}", archive.display())),
            Err(e) => AppMessage::Status(format!("Backup failed: {}", e)),
        });
    }

    fn spawn_config_fix(
        &mut self,
        title: &'static str,
        fix: fn(&std::path::Path) -> Result<postinstall::FixOutcome>,
    ) {
        let Some(config) = self.mounted_config() else {
            return;
        };
        self.spawn_worker("Applying fix...", move || match fix(&config) {
            Ok(outcome) => AppMessage::Status(format!("{}: {}", title, outcome)),
            Err(e) => AppMessage::Status(format!("{} failed: {}", title, e)),
        });
    }

    fn spawn_smart_optimize(&mut self) {
        let Some(config) = self.mounted_config() else {
            return;
        };
        self.spawn_worker("Optimizing...", move || {
            match postinstall::smart_optimize(&config) {
                Ok(outcomes) => AppMessage::Report {
                    title: "Smart Optimization".to_string(),
                    lines: outcomes.iter().map(|o| o.to_string()).collect(),
                },
                Err(e) => AppMessage::Status(format!("Optimization failed: {}", e)),
            }
        });
    }

    fn spawn_freeze_scan(&mut self) {
        self.spawn_worker("Scanning system log for panics...", || {
            AppMessage::Status(postinstall::analyze_freeze().to_string())
        });
    }

    fn spawn_theme_install(&mut self) {
        let Some(oc_dir) = self.state.esp.oc_dir.clone() else {
            self.state.status_message =
                "Mount the EFI partition first (no config.plist found)".to_string();
            return;
        };
        self.spawn_worker("Downloading OpenCanopy resources...", move || {
            match postinstall::install_oc_theme(&oc_dir) {
                Ok(outcome) => AppMessage::Status(outcome.to_string()),
                Err(e) => AppMessage::Status(format!("Theme install failed: {}", e)),
            }
        });
    }

    fn spawn_kext_update_check(&mut self) {
        self.spawn_worker("Checking kext releases...", || {
            let lines = postinstall::check_kext_updates()
                .into_iter()
                .map(|(kext, tag)| format!("{}: {}", kext, tag))
                .collect();
            AppMessage::Report {
                title: "Latest Kext Releases".to_string(),
                lines,
            }
        });
    }

    fn spawn_kext_injection(&mut self, name: &'static str, url: &'static str) {
        let Some(oc_dir) = self.state.esp.oc_dir.clone() else {
            self.state.status_message =
                "Mount the EFI partition first (no config.plist found)".to_string();
            return;
        };
        self.spawn_worker("Downloading and injecting kext...", move || {
            match postinstall::inject_kext(&oc_dir, name, url) {
                Ok(outcome) => AppMessage::Status(outcome.to_string()),
                Err(e) => AppMessage::Status(format!("Injection failed: {}", e)),
            }
        });
    }

    fn spawn_battery_fix(&mut self) {
        let is_laptop = self
            .state
            .hardware
            .as_ref()
            .map(|hw| hw.is_laptop)
            .unwrap_or(false);
        if !is_laptop {
            self.state.status_message =
                "This machine is not a laptop, battery fix skipped".to_string();
            return;
        }
        self.spawn_kext_injection("VirtualSMC", VIRTUAL_SMC_URL);
    }

    fn open_usb_wifi_page(&mut self) {
        self.state.status_message =
            match run_command(&CommandType::Open(USB_WIFI_REPO_URL.to_string())) {
                Ok(_) => "Opened USB Wi-Fi driver page".to_string(),
                Err(e) => format!("Could not open browser: {}", e),
            };
    }

    fn show_smbios_identity(&mut self) {
        let model = smbios_for_budget(self.state.budget).to_string();
        let identity = generate_identity(&model, &mut rand::thread_rng());
        self.state.show_output(
            "Generated SMBIOS Identity",
            vec![
                format!("Model:        {}", identity.model),
                format!("Serial:       {}", identity.serial),
                format!("Board Serial: {}", identity.board_serial),
                format!("SmUUID:       {}", identity.uuid),
                String::new(),
                "Paste these into PlatformInfo > Generic, then reboot.".to_string(),
            ],
        );
    }

    // ========================================================================
    // Reports
    // ========================================================================

    fn spawn_audit(&mut self) {
        self.spawn_worker("Running deep system audit...", || {
            let report = AuditReport::collect();
            AppMessage::Report {
                title: "Deep System Audit".to_string(),
                lines: report.render().lines().map(str::to_string).collect(),
            }
        });
    }

    fn spawn_validation(&mut self) {
        self.spawn_worker("Validating setup...", || {
            let report = run_validation();
            AppMessage::Report {
                title: "Setup Validation".to_string(),
                lines: report.render().lines().map(str::to_string).collect(),
            }
        });
    }
}
