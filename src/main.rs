//! Terminal runner (default binary).
//!
//! Owns the gravity timer: the engine never schedules itself, so the delay
//! until the next tick is recomputed from the current level every time it is
//! rescheduled. Input is polled until that deadline.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use tui_tetromino::config::GameConfig;
use tui_tetromino::core::{gravity_interval_ms, GameSnapshot, GameState};
use tui_tetromino::event_log::{EventLog, LogRecord};
use tui_tetromino::input::{handle_key_event, repeats, should_quit};
use tui_tetromino::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_tetromino::types::GameAction;

fn main() -> Result<()> {
    let config = GameConfig::load()?;
    let mut log = EventLog::open(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &config, &mut log));

    // Always try to restore terminal state.
    let _ = term.exit();
    log.flush();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, log: &mut EventLog) -> Result<()> {
    let mut game = GameState::new(config.seed);
    game.start();
    log.record(&LogRecord::Start {
        seed: game.seed(),
        episode: game.episode_id(),
    });

    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut next_tick = Instant::now() + gravity_delay(&game);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = accepted_action(key) {
                        let changed = game.apply_action(action);
                        match action {
                            GameAction::Restart => {
                                log.record(&LogRecord::Start {
                                    seed: game.seed(),
                                    episode: game.episode_id(),
                                });
                                next_tick = Instant::now() + gravity_delay(&game);
                            }
                            GameAction::Pause if changed => {
                                log.record(&LogRecord::Pause {
                                    paused: game.paused(),
                                });
                            }
                            _ => {}
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        if now >= next_tick {
            game.tick();
            next_tick = now + gravity_delay(&game);
        }

        drain_events(&mut game, log);
    }
}

/// Presses always count; held keys only auto-repeat for movement and rotation.
fn accepted_action(key: KeyEvent) -> Option<GameAction> {
    let action = handle_key_event(key)?;
    match key.kind {
        KeyEventKind::Press => Some(action),
        KeyEventKind::Repeat if repeats(action) => Some(action),
        _ => None,
    }
}

fn gravity_delay(game: &GameState) -> Duration {
    Duration::from_millis(gravity_interval_ms(game.level()) as u64)
}

fn drain_events(game: &mut GameState, log: &mut EventLog) {
    let Some(event) = game.take_last_event() else {
        return;
    };

    log.record(&LogRecord::lock(
        &event,
        game.score(),
        game.level(),
        game.lines(),
    ));
    if event.game_over {
        log.record(&LogRecord::GameOver {
            score: game.score(),
            level: game.level(),
            lines: game.lines(),
        });
    }
}
