use super::key_hints;
use crate::catalog::DeckEntry;
use crate::preferences::Preferences;
use crate::ui::layout::calculate_menu_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn toggle_line(key: &str, label: &str, enabled: bool) -> Line<'static> {
    let mark = if enabled { "[x]" } else { "[ ]" };
    Line::from(format!("{} {}  ({})", mark, label, key))
}

pub fn draw_menu(
    f: &mut Frame,
    decks: &[DeckEntry],
    selected_index: usize,
    prefs: &Preferences,
    notice: Option<&str>,
) {
    let layout = calculate_menu_chunks(f.area());

    let title = Paragraph::new("Flip Deck")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    if decks.is_empty() {
        let empty = Paragraph::new("No decks found. Put .csv files in the decks directory.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Select a Deck"));
        f.render_widget(empty, layout.decks_area);
    } else {
        let items: Vec<ListItem> = decks
            .iter()
            .enumerate()
            .map(|(i, deck)| {
                let style = if i == selected_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(deck.name.clone()).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Select a Deck"),
        );
        f.render_widget(list, layout.decks_area);
    }

    let preferences = Paragraph::new(vec![
        toggle_line("b", "Show back first", prefs.back_first),
        toggle_line("a", "Auto-play audio", prefs.auto_play_audio),
        toggle_line("s", "Shuffle on open", prefs.shuffle_on_start),
    ])
    .block(Block::default().borders(Borders::ALL).title("Preferences"));
    f.render_widget(preferences, layout.preferences_area);

    let help = match notice {
        Some(notice) => Paragraph::new(notice.to_string()).style(Style::default().fg(Color::Red)),
        None => Paragraph::new(Line::from(key_hints(&[
            ("↑/↓", "Navigate"),
            ("Enter", "Open"),
            ("q", "Quit"),
        ]))),
    };
    f.render_widget(
        help.alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        layout.help_area,
    );
}
