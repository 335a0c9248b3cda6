use crate::models::Card;
use std::fs;
use std::path::Path;

/// Load one card per line. Lines with an empty front or back are skipped.
pub fn load_csv(path: &Path) -> std::io::Result<Vec<Card>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_cards(&content))
}

pub fn parse_cards(content: &str) -> Vec<Card> {
    let mut cards = Vec::new();

    for line in content.lines() {
        if let Some((front, back)) = parse_csv_line(line)
            && !front.trim().is_empty()
            && !back.trim().is_empty()
        {
            cards.push(Card::new(front, back));
        }
    }

    cards
}

pub fn parse_csv_line(line: &str) -> Option<(String, String)> {
    let line = line.trim_end_matches('\r');
    let mut chars = line.chars().peekable();
    let mut front = String::new();
    let mut back = String::new();
    let mut current_field = &mut front;
    let mut in_quotes = false;
    let mut field_index = 0;

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current_field.push('"');
                } else {
                    in_quotes = false;
                    if chars.peek() == Some(&',') && field_index == 0 {
                        chars.next();
                        current_field = &mut back;
                        field_index = 1;
                    }
                }
            }
            ',' if !in_quotes && field_index == 0 => {
                field_index = 1;
                current_field = &mut back;
            }
            _ => {
                current_field.push(c);
            }
        }
    }

    if field_index == 0 {
        return None;
    }

    Some((front, back))
}
