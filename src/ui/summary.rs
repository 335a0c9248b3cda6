use super::key_hints;
use crate::models::SessionPhase;
use crate::session::StudySession;
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::truncate_string;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn summary_text(session: &StudySession) -> Text<'static> {
    let engine = &session.engine;
    let mut text = Text::default();

    match engine.phase() {
        SessionPhase::TestComplete => {
            if let Ok(score) = engine.score() {
                text.push_line(Line::from(Span::styled(
                    format!(
                        "Score: {} / {} ({}%)",
                        score.correct, score.total, score.percent
                    ),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            text.push_line(Line::from(""));
            if engine.test_failed().is_empty() {
                text.push_line(Line::from("No missed cards."));
            } else {
                text.push_line(Line::from("Missed:"));
                text.push_line(Line::from(""));
                for (i, id) in engine.test_failed().iter().enumerate() {
                    let card = &engine.cards()[*id];
                    text.push_line(Line::from(format!(
                        "{}. {} - {}",
                        i + 1,
                        truncate_string(&card.front, 40),
                        truncate_string(&card.back, 40)
                    )));
                }
            }
        }
        _ => {
            text.push_line(Line::from(Span::styled(
                format!("All {} cards memorized.", engine.memorized().len()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
        }
    }

    text
}

pub fn draw_summary(f: &mut Frame, session: &StudySession) {
    let layout = calculate_summary_chunks(f.area());

    let title = Paragraph::new(format!("Session Summary - {}", session.deck_name))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let summary = Paragraph::new(summary_text(session))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, layout.content_area);

    let footer = match &session.notice {
        Some(notice) => Line::from(Span::styled(notice.clone(), Style::default().fg(Color::Red))),
        None if session.engine.phase() == SessionPhase::TestComplete => Line::from(key_hints(&[
            ("f", "Review missed"),
            ("t", "Retake"),
            ("r", "Study again"),
            ("m", "Menu"),
            ("q", "Quit"),
        ])),
        None => Line::from(key_hints(&[
            ("r", "Study again"),
            ("t", "Test"),
            ("u", "Undo"),
            ("m", "Menu"),
            ("q", "Quit"),
        ])),
    };
    let help = Paragraph::new(footer)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
