//! Header and common widget rendering
//!
//! ASCII art header, status bar, and the navigation hint line.

use crate::app::{AppMode, AppState};
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header renderer containing the ASCII art header
pub struct HeaderRenderer {
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the ASCII art header
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.header_lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    fn create_header() -> Vec<Line<'static>> {
        let art = [
            r"  _   _    _    ____ _  _____ _   _ _____ _   _ _   _ _____ ",
            r" | | | |  / \  / ___| |/ /_ _| \ | |_   _| | | | \ | | ____|",
            r" | |_| | / _ \| |   | ' / | ||  \| | | | | | | |  \| |  _|  ",
            r" |  _  |/ ___ \ |___| . \ | || |\  | | | | |_| | |\  | |___ ",
            r" |_| |_/_/   \_\____|_|\_\___|_| \_| |_|  \___/|_| \_|_____|",
        ];
        let mut lines: Vec<Line<'static>> = art
            .iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().fg(Colors::PRIMARY))))
            .collect();
        lines.push(Line::from(Span::styled(
            "The Ultimate Hackintosh Toolkit",
            Styles::text_muted(),
        )));
        lines
    }
}

/// Render the status bar with the latest feedback message.
pub fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let style = if state.working {
        Styles::warning()
    } else {
        Styles::text()
    };
    let status = Paragraph::new(state.status_message.as_str())
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, area);
}

/// Render the one-line navigation hint for the current mode.
pub fn render_nav_bar(f: &mut Frame, area: Rect, mode: AppMode) {
    let hint = match mode {
        AppMode::MainMenu => "Up/Down: navigate | Enter: select | q: quit",
        AppMode::Builder => {
            "Left/Right: budget | Up/Down: part | Enter: shop | r: reroll | g: generate EFI | Esc: back"
        }
        AppMode::PostInstall => "Up/Down: navigate | Enter: run | Esc: back",
        AppMode::Output => "Up/Down: scroll | Esc: close",
    };
    let nav = Paragraph::new(hint)
        .style(Styles::nav_hint())
        .alignment(Alignment::Center);
    f.render_widget(nav, area);
}
