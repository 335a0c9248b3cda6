pub mod layout;
mod card;
mod menu;
mod summary;

pub use card::draw_card;
pub use layout::{calculate_card_chunks, calculate_menu_chunks, calculate_summary_chunks};
pub use menu::draw_menu;
pub use summary::draw_summary;

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Key hint spans in the shared "key label  key label" footer style.
fn key_hints(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::from(format!(" {}  ", label)));
    }
    spans
}
