use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use oddball::achievements::{data, persistence::load_achievements, persistence::save_achievements};
use oddball::build_info;
use oddball::core::{Difficulty, GameSession, Pan};
use oddball::stats::StatsManager;
use oddball::ui::{self, MessageKind, ViewState};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut start_difficulty = Difficulty::Easy;

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "oddball {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Oddball - Terminal Balance-Scale Puzzle Game\n");
                println!("Usage: oddball [command]\n");
                println!("Commands:");
                println!("  --difficulty <name>  Start on easy, medium, hard, or expert");
                println!("  --version            Show version information");
                println!("  --help               Show this help message");
                std::process::exit(0);
            }
            "--difficulty" | "-d" => match args.get(2).map(|s| Difficulty::from_name(s)) {
                Some(Ok(difficulty)) => start_difficulty = difficulty,
                Some(Err(err)) => {
                    eprintln!("{}", err);
                    std::process::exit(1);
                }
                None => {
                    eprintln!("--difficulty requires a name (easy, medium, hard, expert)");
                    std::process::exit(1);
                }
            },
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'oddball --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let stats_manager = StatsManager::new()?;
    let progress = stats_manager.load_or_default();
    let achievements = load_achievements();

    let mut rng = rand::thread_rng();
    let mut session = GameSession::new(start_difficulty, progress, achievements, &mut rng);

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut session, &stats_manager);

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut GameSession,
    stats_manager: &StatsManager,
) -> io::Result<()> {
    let mut view = ViewState::new();
    view.set_message(
        "Welcome! Find the odd balloon. Press 1-4 to pick a difficulty.",
        MessageKind::Info,
    );

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, session, &view))?;

        // The poll timeout doubles as the timer-display refresh rate
        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let balloon_count = session.instance().balloon_count();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Tab => view.show_achievements = !view.show_achievements,
            KeyCode::Left => {
                view.cursor = view.cursor.checked_sub(1).unwrap_or(balloon_count - 1);
            }
            KeyCode::Right => {
                view.cursor = (view.cursor + 1) % balloon_count;
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                session.select(view.cursor);
                view.set_message(
                    format!(
                        "Balloon {} selected. Press g to guess it.",
                        view.cursor + 1
                    ),
                    MessageKind::Info,
                );
            }
            KeyCode::Char('a') => session.place(view.cursor, Pan::Left),
            KeyCode::Char('d') => session.place(view.cursor, Pan::Right),
            KeyCode::Char('s') => session.unplace(view.cursor),
            KeyCode::Char('w') => match session.weigh() {
                Ok(outcome) => {
                    view.last_outcome = Some(outcome);
                    view.set_message(outcome.label(), MessageKind::Success);
                }
                Err(err) => view.set_message(err.to_string(), MessageKind::Warning),
            },
            KeyCode::Char('u') => match session.undo() {
                Ok(()) => view.set_message("Last weighing undone.", MessageKind::Success),
                Err(err) => view.set_message(err.to_string(), MessageKind::Warning),
            },
            KeyCode::Char('g') => handle_guess(session, &mut view, stats_manager),
            KeyCode::Char('r') | KeyCode::Char('n') => {
                let mut rng = rand::thread_rng();
                session.reset(&mut rng);
                view.reset_for_new_game();
                view.set_message("New game started!", MessageKind::Info);
            }
            KeyCode::Char(c @ '1'..='4') => {
                let difficulty = Difficulty::ALL[c as usize - '1' as usize];
                let mut rng = rand::thread_rng();
                session.change_difficulty(difficulty, &mut rng);
                view.reset_for_new_game();
                view.set_message(
                    format!("Difficulty set to {}!", difficulty.name().to_uppercase()),
                    MessageKind::Success,
                );
            }
            _ => {}
        }

        // A difficulty change can shrink the balloon row under the cursor
        let balloon_count = session.instance().balloon_count();
        if view.cursor >= balloon_count {
            view.cursor = balloon_count - 1;
        }
    }
}

fn handle_guess(session: &mut GameSession, view: &mut ViewState, stats_manager: &StatsManager) {
    let report = match session.guess() {
        Ok(report) => report,
        Err(err) => {
            view.set_message(err.to_string(), MessageKind::Warning);
            return;
        }
    };

    if report.correct {
        view.last_score = Some(report.score);
        let mut message = format!(
            "Correct! Balloon {} was the odd one. +{} points",
            report.guessed + 1,
            report.score
        );
        for id in &report.unlocked {
            if let Some(def) = data::definition(*id) {
                message.push_str(&format!("  |  {} {} unlocked!", def.icon, def.name));
            }
        }
        view.set_message(message, MessageKind::Success);
    } else {
        view.revealed = report.revealed.clone();
        let odd_list = report
            .revealed
            .iter()
            .map(|id| (id + 1).to_string())
            .collect::<Vec<_>>()
            .join(" and ");
        view.set_message(
            format!("Wrong! The odd balloon was #{}", odd_list),
            MessageKind::Error,
        );
    }

    // Progress is persisted after every recorded result
    if stats_manager.save(&session.progress).is_err() {
        view.set_message("Warning: could not save progress", MessageKind::Warning);
    }
    if save_achievements(&session.achievements).is_err() {
        view.set_message("Warning: could not save achievements", MessageKind::Warning);
    }
}
