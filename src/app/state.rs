//! Application state definitions
//!
//! Contains all state-related types for the application including AppState
//! and AppMode.

#![allow(dead_code)]

use crate::esp::EspState;
use crate::hardware::HardwareScan;
use crate::logic::preinstall::Recommendation;
use crate::theme::UiConstants;

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Build budget in INR, stepped by the slider keys
    pub budget: u32,
    /// Rolled tier listing for the current budget
    pub recommendation: Option<Recommendation>,
    /// Selected row in the parts list
    pub part_selection: usize,
    /// Main menu selection state
    pub main_menu_selection: usize,
    /// Post-install tools menu selection state
    pub tools_menu_selection: usize,
    /// Status message for user feedback
    pub status_message: String,
    /// Hardware probe results, filled by the startup scan thread
    pub hardware: Option<HardwareScan>,
    /// EFI partition state, filled by the startup scan thread
    pub esp: EspState,
    /// Title of the output screen
    pub output_title: String,
    /// Lines shown on the output screen
    pub output_lines: Vec<String>,
    /// Scroll offset into the output lines
    pub output_scroll: usize,
    /// Mode to return to when the output screen closes
    pub return_mode: AppMode,
    /// Whether a background job is in flight
    pub working: bool,
}

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Main menu - entry point for all functionality
    MainMenu,
    /// Budget slider and parts list
    Builder,
    /// Post-install tools menu
    PostInstall,
    /// Scrollable text output (audit reports, fix results, kext updates)
    Output,
}

impl AppState {
    /// Step the budget up or down, clamped to the slider bounds.
    pub fn step_budget(&mut self, up: bool) {
        self.budget = if up {
            (self.budget + UiConstants::BUDGET_STEP).min(UiConstants::BUDGET_MAX)
        } else {
            self.budget
                .saturating_sub(UiConstants::BUDGET_STEP)
                .max(UiConstants::BUDGET_MIN)
        };
    }

    /// Show a text report on the output screen, remembering where to return.
    pub fn show_output(&mut self, title: impl Into<String>, lines: Vec<String>) {
        self.output_title = title.into();
        self.output_lines = lines;
        self.output_scroll = 0;
        if self.mode != AppMode::Output {
            self.return_mode = self.mode;
        }
        self.mode = AppMode::Output;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::MainMenu,
            budget: 50_000,
            recommendation: None,
            part_selection: 0,
            main_menu_selection: 0,
            tools_menu_selection: 0,
            status_message: "Welcome to HackinTune".to_string(),
            hardware: None,
            esp: EspState::default(),
            output_title: String::new(),
            output_lines: Vec::new(),
            output_scroll: 0,
            return_mode: AppMode::MainMenu,
            working: false,
        }
    }
}
