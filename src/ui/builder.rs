//! Builder screen rendering
//!
//! Budget slider, tier readout, and the rolled parts list with search hints.

use crate::app::AppState;
use crate::theme::{Styles, UiConstants};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    render_parts_list(f, columns[0], state);
    render_budget_panel(f, columns[1], state);
}

fn render_parts_list(f: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = match &state.recommendation {
        Some(rec) => rec
            .parts
            .iter()
            .enumerate()
            .map(|(i, part)| {
                let mut spans = vec![
                    Span::styled(format!("{:<12}", part.category.to_string()), Styles::header()),
                    Span::raw(part.name),
                ];
                if let Some(tag) = part.tag {
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(format!("[{}]", tag), Styles::part_tag()));
                }
                let line = Line::from(spans);
                if i == state.part_selection {
                    ListItem::new(line).style(Styles::selected())
                } else {
                    ListItem::new(line).style(Styles::unselected())
                }
            })
            .collect(),
        None => vec![ListItem::new("Adjust the budget to roll a build")],
    };

    let title = match &state.recommendation {
        Some(rec) => format!(" Recommended Build: {} ", rec.tier_name),
        None => " Recommended Build ".to_string(),
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(Span::styled(title, Styles::tier_name())),
    );
    f.render_widget(list, area);
}

fn render_budget_panel(f: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let span = (UiConstants::BUDGET_MAX - UiConstants::BUDGET_MIN) as f64;
    let ratio = ((state.budget.saturating_sub(UiConstants::BUDGET_MIN)) as f64 / span).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Budget"))
        .gauge_style(Styles::success())
        .ratio(ratio)
        .label(format!("Rs. {}", state.budget));
    f.render_widget(gauge, rows[0]);

    let mut lines = vec![
        Line::from(Span::styled("SMBIOS Preset", Styles::header())),
        Line::from(Span::styled(
            crate::efi::smbios_for_budget(state.budget).to_string(),
            Styles::info(),
        )),
        Line::from(""),
    ];
    if let Some(hw) = &state.hardware {
        lines.push(Line::from(Span::styled("This Machine", Styles::header())));
        lines.push(compat_line("Wi-Fi", &hw.wifi.status));
        lines.push(compat_line("Bluetooth", &hw.bluetooth.status));
        lines.push(Line::from(format!("Audio:     {}", hw.audio_label)));
    } else {
        lines.push(Line::from(Span::styled(
            crate::theme::UiText::SCANNING,
            Styles::warning(),
        )));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_inactive())
            .title("Target"),
    );
    f.render_widget(panel, rows[1]);
}

fn compat_line(label: &str, status: &crate::hardware::DeviceStatus) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{:<10}", format!("{}:", label))),
        Span::styled(
            status.label(),
            crate::theme::Theme::compat_style(status.is_compatible()),
        ),
    ])
}
