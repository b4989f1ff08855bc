//! Centralized theme and styling for the TUI
//!
//! Single source of truth for colors, styles, and layout constants. The
//! palette leans green-on-black with gold highlights, matching the
//! terminal-hacker look of the rest of the interface.

#![allow(dead_code)]

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Primary dark background for panels
    pub const BG_PRIMARY: Color = Color::Rgb(12, 18, 12);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent, used for borders, the header, and tier names
    pub const PRIMARY: Color = Color::Green;

    /// Secondary accent, used for selections and part tags
    pub const ACCENT: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    /// Compatible hardware, applied fixes, healthy checks
    pub const SUCCESS: Color = Color::Green;

    /// Skipped fixes, pending probes
    pub const WARNING: Color = Color::Yellow;

    /// Incompatible hardware, failed fixes, unhealthy checks
    pub const ERROR: Color = Color::Red;

    /// Informational rows (budget readout, SMBIOS preset)
    pub const INFO: Color = Color::Cyan;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Green;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected item highlight background
    pub const SELECTED_BG: Color = Color::Green;

    /// Selected item text (for contrast on green)
    pub const SELECTED_FG: Color = Color::Black;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Main title style (green, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Section header style
    pub fn header() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Tier name readout (gold, bold)
    pub fn tier_name() -> Style {
        Style::default()
            .fg(Colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Part tag annotation ("Best Value", "Binned")
    pub fn part_tag() -> Style {
        Style::default()
            .fg(Colors::ACCENT)
            .add_modifier(Modifier::ITALIC)
    }

    /// Active border style
    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    /// Inactive border style
    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Selected/highlighted item
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Unselected list item
    pub fn unselected() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Success message style
    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    /// Warning message style
    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    /// Error message style
    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Info message style
    pub fn info() -> Style {
        Style::default().fg(Colors::INFO)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Theme context providing semantic style lookups
pub struct Theme;

impl Theme {
    /// Style for a hardware compatibility verdict
    pub fn compat_style(compatible: bool) -> Style {
        if compatible {
            Styles::success()
        } else {
            Styles::error()
        }
    }

    /// Style for a fix outcome line
    pub fn outcome_style(outcome: &crate::logic::postinstall::FixOutcome) -> Style {
        use crate::logic::postinstall::FixOutcome;
        match outcome {
            FixOutcome::Applied(_) => Styles::success(),
            FixOutcome::Skipped(_) => Styles::warning(),
            FixOutcome::Failed(_) => Styles::error(),
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Header height (with ASCII art)
    pub const HEADER_HEIGHT: u16 = 8;

    /// Status bar height
    pub const STATUS_BAR_HEIGHT: u16 = 3;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Budget step per arrow key press, in INR
    pub const BUDGET_STEP: u32 = 2_000;

    /// Slider lower bound, in INR
    pub const BUDGET_MIN: u32 = 30_000;

    /// Slider upper bound, in INR
    pub const BUDGET_MAX: u32 = 600_000;
}

// =============================================================================
// TEXT CONSTANTS
// =============================================================================

/// Common UI text strings
pub struct UiText;

impl UiText {
    pub const PRESS_ENTER: &'static str = "Press Enter to select";
    pub const PRESS_ESC: &'static str = "Press Esc to go back";
    pub const SCANNING: &'static str = "Scanning hardware...";
    pub const WORKING: &'static str = "Working...";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::postinstall::FixOutcome;

    #[test]
    fn test_styles_build() {
        let _ = Styles::title();
        let _ = Styles::selected();
        let _ = Styles::tier_name();
    }

    #[test]
    fn test_outcome_styles_differ() {
        let applied = Theme::outcome_style(&FixOutcome::Applied(String::new()));
        let failed = Theme::outcome_style(&FixOutcome::Failed(String::new()));
        assert_ne!(applied, failed);
    }

    #[test]
    fn test_budget_bounds() {
        assert!(UiConstants::BUDGET_MIN < UiConstants::BUDGET_MAX);
        assert_eq!(
            (UiConstants::BUDGET_MAX - UiConstants::BUDGET_MIN) % UiConstants::BUDGET_STEP,
            0
        );
    }
}
