mod board;
mod consts;
mod game;
mod input;
mod render;

use crate::board::Size;
use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH, LOG_FILE, LOG_LEVEL, TICK_RATE};
use crate::game::{Game, Status, StepResult};
use crate::input::Command;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, error, info};
use rand::Rng;
use ratatui::prelude::*;
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::io::{self, Stdout};
use std::time::Instant;

fn main() -> Result<(), io::Error> {
    // Stdout belongs to the terminal UI, so logs go to a file
    WriteLogger::init(LOG_LEVEL, Config::default(), File::create(LOG_FILE)?)
        .map_err(io::Error::other)?;

    info!("Starting snake on a {}x{} board", BOARD_WIDTH, BOARD_HEIGHT);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let mut game = Game::new(Size {
        width: BOARD_WIDTH,
        height: BOARD_HEIGHT,
    });
    let result = run(&mut terminal, &mut game);
    if let Err(e) = &result {
        error!("Game loop failed: {}", e);
    }

    let restore = restore_terminal(&mut terminal);
    finish(result, restore).map(|()| {
        info!("Exiting with score {}", game.score());
        println!("Score: {}", game.score());
    })
}

/// Runs every cleanup step even if an earlier one fails.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    let raw_mode = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw_mode.and(screen).and(cursor)
}

// The loop error takes precedence over a cleanup error.
fn finish(result: io::Result<()>, restore: io::Result<()>) -> io::Result<()> {
    if let Err(e) = &restore {
        error!("Failed to restore terminal: {}", e);
    }
    result.and(restore)
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, game: &mut Game) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| render::draw(f, game))?;

        match game.status() {
            Status::Playing => {}
            Status::Quit => return Ok(()),
            Status::Crashed | Status::BoardFull => return wait_for_key_press(),
        }

        // Handle input until the frame is up
        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = Command::from_key_event(key) {
                    game.handle_command(command);
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            tick(game);
            last_tick = Instant::now();
        }
    }
}

fn tick<R: Rng>(game: &mut Game<R>) {
    match game.advance() {
        StepResult::Collision => {
            info!(
                "Snake hit its tail at {:?}, final score {}",
                game.snake().head(),
                game.score()
            );
        }
        StepResult::Ate => {
            debug!(
                "Ate fruit, score {}, tail length {}",
                game.score(),
                game.snake().tail().count()
            );
        }
        StepResult::Ongoing | StepResult::Idle => {}
    }
}

fn wait_for_key_press() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
