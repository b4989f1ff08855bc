//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - ASCII art header, status bar, and navigation hints
//! - `builder` - Budget slider and parts list screen
//! - `tools` - Post-install tools screen
//!
//! The main module owns `UiRenderer`, which lays out the frame and
//! dispatches to the screen for the current mode.

#![allow(dead_code)]

mod builder;
mod header;
mod tools;

use crate::app::{AppMode, AppState, MAIN_MENU_ITEMS};
use crate::logic::postinstall::FixOutcome;
use crate::theme::{Styles, Theme, UiConstants};
use header::HeaderRenderer;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Top-level renderer, dispatching to the screen for the current mode
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the full frame for the current state.
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(UiConstants::STATUS_BAR_HEIGHT),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(f.area());

        self.header.render_header(f, rows[0]);

        match state.mode {
            AppMode::MainMenu => render_main_menu(f, rows[1], state),
            AppMode::Builder => builder::render(f, rows[1], state),
            AppMode::PostInstall => tools::render(f, rows[1], state),
            AppMode::Output => render_output(f, rows[1], state),
        }

        header::render_status_bar(f, rows[2], state);
        header::render_nav_bar(f, rows[3], state.mode);
    }
}

fn render_main_menu(f: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = MAIN_MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i == state.main_menu_selection {
                ListItem::new(format!("> {}", item)).style(Styles::selected())
            } else {
                ListItem::new(format!("  {}", item)).style(Styles::unselected())
            }
        })
        .collect();

    let menu = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(Span::styled(" Main Menu ", Styles::title())),
    );

    // Keep the menu narrow and centered
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(area);
    f.render_widget(menu, columns[1]);
}

fn render_output(f: &mut Frame, area: Rect, state: &AppState) {
    // Fix reports carry their outcome in the line prefix; color those rows
    let lines: Vec<Line> = state
        .output_lines
        .iter()
        .map(|line| match FixOutcome::from_report_line(line) {
            Some(outcome) => Line::styled(line.as_str(), Theme::outcome_style(&outcome)),
            None => Line::from(line.as_str()),
        })
        .collect();
    let output = Paragraph::new(lines)
        .scroll((state.output_scroll as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_active())
                .title(Span::styled(
                    format!(" {} ", state.output_title),
                    Styles::title(),
                )),
        );
    f.render_widget(output, area);
}
