use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::{execute, terminal};
use n_in_a_row::config::AppConfig;
use n_in_a_row::display::{render_board, DisplayState};
use n_in_a_row::player::build_controller;
use n_in_a_row::selfplay::{run_selfplay, SelfPlayConfig};
use n_in_a_row::{ControllerKind, GameError, GameSession, MatchState, PlayerController, PlayerId};
use std::io::{self, Write};
use std::time::Duration;

const PLAYING_FOOTER: &str = "[q]: Quit match";
const AFTER_MATCH_FOOTER: &str = "[n]: New match | [q]: Menu";

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = AppConfig::load_or_default();

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), terminal::EnterAlternateScreen)?;

    let res = run(&config);

    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

/// Block until one of `keys` is pressed.
fn wait_for(keys: &[char]) -> anyhow::Result<char> {
    loop {
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char(c) if keys.contains(&c) => return Ok(c),
                KeyCode::Esc if keys.contains(&'q') => return Ok('q'),
                KeyCode::Enter if keys.contains(&'\n') => return Ok('\n'),
                _ => {}
            }
        }
    }
}

fn clear_screen() -> io::Result<()> {
    execute!(
        io::stdout(),
        terminal::Clear(terminal::ClearType::All),
        crossterm::cursor::MoveTo(0, 0)
    )
}

fn run(config: &AppConfig) -> anyhow::Result<()> {
    loop {
        clear_screen()?;
        print!("=== N in a Row ===\r\n");
        print!(
            "{0}x{0} board, {1} in a row to win, search depth {2}\r\n",
            config.game.board_size, config.game.win_length, config.game.search_depth
        );
        print!("\r\nSelect mode:\r\n");
        print!("1. Local match\r\n");
        print!("2. Self-play ({} games)\r\n", config.selfplay.num_games);
        print!("q. Quit\r\n");
        io::stdout().flush()?;

        match wait_for(&['1', '2', 'q'])? {
            '1' => run_local(config)?,
            '2' => run_self_play(config)?,
            _ => return Ok(()),
        }
    }
}

fn select_seat(player_id: PlayerId, default: ControllerKind) -> anyhow::Result<ControllerKind> {
    clear_screen()?;
    print!("Select {}:\r\n", player_id);
    for (i, kind) in ControllerKind::ALL.iter().enumerate() {
        print!("{}. {}\r\n", i + 1, kind);
    }
    print!("[Enter]: {} | [q]: Back\r\n", default);
    io::stdout().flush()?;

    let kind = match wait_for(&['1', '2', '3', '4', '\n', 'q'])? {
        '\n' => default,
        'q' => return Err(GameError::Aborted.into()),
        c => ControllerKind::ALL[c as usize - '1' as usize],
    };
    Ok(kind)
}

fn pick_seats(config: &AppConfig) -> anyhow::Result<[ControllerKind; 2]> {
    let first = select_seat(PlayerId::First, config.players[0])?;
    let second = select_seat(PlayerId::Second, config.players[1])?;
    Ok([first, second])
}

fn run_local(config: &AppConfig) -> anyhow::Result<()> {
    let seats = match pick_seats(config) {
        Ok(seats) => seats,
        Err(e) if matches!(e.downcast_ref::<GameError>(), Some(GameError::Aborted)) => {
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let p1 = build_controller(seats[0], PlayerId::First, &config.game, None);
    let p2 = build_controller(seats[1], PlayerId::Second, &config.game, None);
    let mut session = GameSession::new(config.game)?;

    loop {
        render_session(&session, None, PLAYING_FOOTER)?;
        let result = session.play(p1.as_ref(), p2.as_ref(), |s| {
            after_move(s, p1.as_ref(), p2.as_ref())
        });

        let status = match result {
            Ok(MatchState::Won { winner, line }) => {
                let name = match winner {
                    PlayerId::First => p1.name(),
                    PlayerId::Second => p2.name(),
                };
                let display = DisplayState {
                    highlights: line,
                    last_move: session.last_move().map(|p| p.position),
                    status_msg: Some(format!("{} wins!", name)),
                    footer: Some(AFTER_MATCH_FOOTER.to_string()),
                    ..DisplayState::default()
                };
                render_board(session.board_snapshot(), &display)?;
                None
            }
            Ok(_) => Some("Draw: the board is full".to_string()),
            Err(GameError::Aborted) => Some("Match abandoned".to_string()),
            Err(e) => return Err(e.into()),
        };
        if let Some(msg) = status {
            render_session(&session, Some(msg), AFTER_MATCH_FOOTER)?;
        }

        match wait_for(&['n', 'q'])? {
            'n' => session.reset(),
            _ => return Ok(()),
        }
    }
}

fn render_session(session: &GameSession, status: Option<String>, footer: &str) -> io::Result<()> {
    let status = status.or_else(|| session.active_player().map(|p| format!("{} to move", p)));
    let display = DisplayState {
        last_move: session.last_move().map(|p| p.position),
        status_msg: status,
        footer: Some(footer.to_string()),
        ..DisplayState::default()
    };
    render_board(session.board_snapshot(), &display)
}

/// Redraw after each move and let the user stop an AI turn with `q`.
fn after_move(
    session: &GameSession,
    p1: &dyn PlayerController,
    p2: &dyn PlayerController,
) -> Result<(), GameError> {
    let next = match session.active_player() {
        Some(PlayerId::First) => p1,
        Some(PlayerId::Second) => p2,
        None => return Ok(()),
    };
    if next.is_interactive() {
        return Ok(());
    }

    let terminal_err = |e: io::Error| GameError::Terminal(e.to_string());
    render_session(
        session,
        Some(format!("{} is thinking...", next.name())),
        PLAYING_FOOTER,
    )
    .map_err(terminal_err)?;

    // only keys already pressed are read; the first wait paces AI-vs-AI matches
    let mut wait = ai_turn_pause(p1, p2);
    while event::poll(wait).map_err(terminal_err)? {
        if let Event::Key(key) = event::read().map_err(terminal_err)? {
            if is_quit_key(key.code) {
                return Err(GameError::Aborted);
            }
        }
        wait = Duration::ZERO;
    }
    Ok(())
}

/// Pause between moves so an AI-only match can be followed. No pause with a human seated.
fn ai_turn_pause(p1: &dyn PlayerController, p2: &dyn PlayerController) -> Duration {
    if p1.is_interactive() || p2.is_interactive() {
        Duration::ZERO
    } else {
        Duration::from_millis(300)
    }
}

fn is_quit_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Esc)
}

fn run_self_play(config: &AppConfig) -> anyhow::Result<()> {
    let sp_config = SelfPlayConfig::from_settings(&config.selfplay, config.game);

    clear_screen()?;
    print!("=== Self-Play ===\r\n");
    print!(
        "{} games: {} vs {}\r\nRunning...\r\n",
        sp_config.num_games, sp_config.first, sp_config.second
    );
    io::stdout().flush()?;

    match run_selfplay(&sp_config) {
        Ok(stats) => {
            print!("\r\n--- Results ---\r\n");
            print!(
                "{} wins: {} ({:.1}%)\r\n",
                stats.first,
                stats.first_wins,
                stats.rate(stats.first_wins)
            );
            print!(
                "{} wins: {} ({:.1}%)\r\n",
                stats.second,
                stats.second_wins,
                stats.rate(stats.second_wins)
            );
            print!("Draws: {} ({:.1}%)\r\n", stats.draws, stats.rate(stats.draws));
            print!("Avg Moves: {:.1}\r\n", stats.avg_moves);
            print!("Avg Time: {:.1}ms\r\n", stats.avg_time_ms);
        }
        Err(e) => print!("\r\nSelf-play failed: {}\r\n", e),
    }

    print!("\r\n[q]: Menu\r\n");
    io::stdout().flush()?;
    wait_for(&['q'])?;
    Ok(())
}
