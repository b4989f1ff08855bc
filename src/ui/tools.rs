//! Post-install tools screen rendering
//!
//! Tool menu on the left, hardware and EFI partition status on the right.

use crate::app::{AppState, TOOL_MENU_ITEMS};
use crate::theme::Styles;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_tool_menu(f, columns[0], state);
    render_system_panel(f, columns[1], state);
}

fn render_tool_menu(f: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = TOOL_MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i == state.tools_menu_selection {
                ListItem::new(format!("> {}", item)).style(Styles::selected())
            } else {
                ListItem::new(format!("  {}", item)).style(Styles::unselected())
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(Span::styled(" Post-Install Tools ", Styles::title())),
    );
    f.render_widget(list, area);
}

fn render_system_panel(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled("EFI Partition", Styles::header())));
    match &state.esp.oc_dir {
        Some(dir) => lines.push(Line::from(Span::styled(
            format!("Mounted: {}", dir.display()),
            Styles::success(),
        ))),
        None if state.esp.partitions.is_empty() => {
            lines.push(Line::from(Span::styled("Not found", Styles::error())))
        }
        None => lines.push(Line::from(Span::styled(
            format!("Unmounted: {}", state.esp.partitions.join(", ")),
            Styles::warning(),
        ))),
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Hardware", Styles::header())));
    match &state.hardware {
        Some(hw) => {
            lines.push(status_line("Wi-Fi", hw.wifi.status.label(), hw.wifi.status.is_compatible()));
            lines.push(status_line(
                "Bluetooth",
                hw.bluetooth.status.label(),
                hw.bluetooth.status.is_compatible(),
            ));
            lines.push(Line::from(format!("Audio:     {}", hw.audio_label)));
            lines.push(Line::from(format!(
                "Chassis:   {}",
                if hw.is_laptop { "Laptop" } else { "Desktop" }
            )));
        }
        None => lines.push(Line::from(Span::styled(
            crate::theme::UiText::SCANNING,
            Styles::warning(),
        ))),
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_inactive())
            .title("System"),
    );
    f.render_widget(panel, area);
}

fn status_line(label: &str, value: String, ok: bool) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{:<10}", format!("{}:", label))),
        Span::styled(value, crate::theme::Theme::compat_style(ok)),
    ])
}
