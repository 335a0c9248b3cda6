use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use clap::Parser;
use flip_deck::{
    cli, draw_card, draw_menu, draw_summary, handle_session_input, handle_summary_input,
    list_decks, logger, AppState, Cli, Config, Preferences, StudySession,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> io::Result<()> {
    let args = Cli::parse();
    let mut config = Config::from_env();
    args.apply(&mut config);
    if let Err(e) = logger::init(&config.log_path()) {
        eprintln!("Logging disabled: {}", e);
    }

    if args.update_manifest {
        println!("{}", cli::update_manifest(&config.decks_dir)?);
        return Ok(());
    }
    logger::log(&format!("Starting with decks from {}", config.decks_dir.display()));

    let mut prefs = match Preferences::load(&config.preferences_path()) {
        Ok(prefs) => prefs,
        Err(e) => {
            logger::log(&format!("Ignoring unreadable preferences: {}", e));
            Preferences::default()
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config, &mut prefs);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
    prefs: &mut Preferences,
) -> io::Result<()> {
    let decks = list_decks(&config.decks_dir);
    let mut app_state = AppState::Menu;
    let mut selected_deck_index: usize = 0;
    let mut session: Option<StudySession> = None;
    let mut menu_notice: Option<String> = None;

    loop {
        terminal.draw(|f| match app_state {
            AppState::Menu => draw_menu(
                f,
                &decks,
                selected_deck_index,
                prefs,
                menu_notice.as_deref(),
            ),
            AppState::Card => {
                if let Some(session) = &session {
                    draw_card(f, session, prefs);
                }
            }
            AppState::Summary => {
                if let Some(session) = &session {
                    draw_summary(f, session);
                }
            }
        })?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app_state {
            AppState::Menu => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    selected_deck_index = selected_deck_index.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if selected_deck_index < decks.len().saturating_sub(1) {
                        selected_deck_index += 1;
                    }
                }
                KeyCode::Enter => {
                    if let Some(deck) = decks.get(selected_deck_index) {
                        match StudySession::open(deck, prefs) {
                            Ok(opened) => {
                                session = Some(opened);
                                menu_notice = None;
                                app_state = AppState::Card;
                            }
                            Err(e) => {
                                logger::log(&format!("Failed to open '{}': {}", deck.name, e));
                                menu_notice = Some(format!("Could not open {}: {}", deck.file, e));
                            }
                        }
                    }
                }
                KeyCode::Char(c @ ('b' | 'a' | 's')) => {
                    match c {
                        'b' => prefs.back_first = !prefs.back_first,
                        'a' => prefs.auto_play_audio = !prefs.auto_play_audio,
                        _ => prefs.shuffle_on_start = !prefs.shuffle_on_start,
                    }
                    if let Err(e) = prefs.save(&config.preferences_path()) {
                        logger::log(&format!("Failed to save preferences: {}", e));
                        menu_notice = Some(format!("Could not save preferences: {}", e));
                    }
                }
                KeyCode::Char('q') | KeyCode::Esc => break,
                _ => {}
            },
            AppState::Card => {
                if let Some(session) = &mut session {
                    handle_session_input(session, key, &mut app_state);
                }
            }
            AppState::Summary => {
                if key.code == KeyCode::Char('q') {
                    break;
                }
                if let Some(session) = &mut session {
                    handle_summary_input(session, key, &mut app_state);
                }
            }
        }
    }

    logger::log("Exiting");
    Ok(())
}
