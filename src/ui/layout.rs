use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct CardLayout {
    pub header_area: Rect,
    pub prompt_area: Rect,
    pub answer_area: Rect,
    pub help_area: Rect,
}

pub struct MenuLayout {
    pub title_area: Rect,
    pub decks_area: Rect,
    pub preferences_area: Rect,
    pub help_area: Rect,
}

pub struct SummaryLayout {
    pub header_area: Rect,
    pub content_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_card_chunks(area: Rect) -> CardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(40),
            Constraint::Min(3),
            Constraint::Length(4),
        ])
        .split(area);

    CardLayout {
        header_area: chunks[0],
        prompt_area: chunks[1],
        answer_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_menu_chunks(area: Rect) -> MenuLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(area);

    MenuLayout {
        title_area: chunks[0],
        decks_area: chunks[1],
        preferences_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_summary_chunks(area: Rect) -> SummaryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    SummaryLayout {
        header_area: chunks[0],
        content_area: chunks[1],
        footer_area: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_layout() {
        let area = Rect::new(0, 0, 100, 100);
        let layout = calculate_card_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.help_area.height, 4);
        assert!(layout.prompt_area.height > 0);
        assert!(layout.answer_area.height >= 3);
        assert_eq!(layout.header_area.y, 1);
    }

    #[test]
    fn test_menu_layout() {
        let area = Rect::new(0, 0, 80, 40);
        let layout = calculate_menu_chunks(area);

        assert_eq!(layout.title_area.height, 3);
        assert_eq!(layout.preferences_area.height, 5);
        assert_eq!(layout.help_area.height, 3);
        // margin 1 leaves 38 rows
        assert_eq!(layout.decks_area.height, 38 - 11);
    }

    #[test]
    fn test_summary_layout() {
        let area = Rect::new(0, 0, 100, 100);
        let layout = calculate_summary_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.footer_area.height, 3);
        assert_eq!(layout.content_area.height, 92);
    }
}
