use super::key_hints;
use crate::models::Mode;
use crate::preferences::Preferences;
use crate::session::StudySession;
use crate::ui::layout::calculate_card_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn progress_line(session: &StudySession) -> String {
    let status = session.status();
    match status.mode() {
        Mode::Study => format!(
            "{} - Study - {} left, {} memorized",
            session.deck_name, status.remaining, status.memorized
        ),
        Mode::Test => format!(
            "{} - Test - card {} / {}",
            session.deck_name,
            status.total - status.remaining + 1,
            status.total
        ),
    }
}

fn side_titles(prefs: &Preferences) -> (&'static str, &'static str) {
    if prefs.back_first {
        ("Back", "Front")
    } else {
        ("Front", "Back")
    }
}

pub fn draw_card(f: &mut Frame, session: &StudySession, prefs: &Preferences) {
    let layout = calculate_card_chunks(f.area());
    let (prompt_title, answer_title) = side_titles(prefs);

    let header = Paragraph::new(progress_line(session))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let audio_marker = match session.visible_audio(prefs) {
        Some(_) if prefs.auto_play_audio => " ♪ auto",
        Some(_) => " ♪",
        None => "",
    };

    let prompt_block_title = if session.flipped {
        prompt_title.to_string()
    } else {
        format!("{}{}", prompt_title, audio_marker)
    };
    let prompt = Paragraph::new(Text::from(session.prompt_side(prefs).unwrap_or("")))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(prompt_block_title));
    f.render_widget(prompt, layout.prompt_area);

    let answer_text = if session.flipped {
        Text::from(Line::from(Span::styled(
            session.answer_side(prefs).unwrap_or("").to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )))
    } else {
        Text::from(Line::from(Span::styled(
            "[Space to flip]",
            Style::default().fg(Color::DarkGray),
        )))
    };
    let answer_block_title = if session.flipped {
        format!("{}{}", answer_title, audio_marker)
    } else {
        answer_title.to_string()
    };
    let answer = Paragraph::new(answer_text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(answer_block_title));
    f.render_widget(answer, layout.answer_area);

    let mut help_text = vec![Line::from(key_hints(&[
        ("Space", "Flip"),
        ("y", "Got it"),
        ("n", "Missed"),
        ("s", "Skip"),
        ("u", "Undo"),
    ]))];
    match &session.notice {
        Some(notice) => help_text.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Red),
        ))),
        None => help_text.push(Line::from(key_hints(&[
            ("x", "Shuffle"),
            ("r", "Restart"),
            ("t", "Test"),
            ("m", "Menu"),
        ]))),
    }
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
