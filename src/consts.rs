use ratatui::style::{Color, Modifier, Style};
use simplelog::LevelFilter;
use std::time::Duration;

pub(crate) const BOARD_WIDTH: u16 = 20;
pub(crate) const BOARD_HEIGHT: u16 = 17;

/// The tail stops growing once it holds this many segments
pub(crate) const MAX_TAIL: usize = 100;

pub(crate) const FRUIT_SCORE: u32 = 10;
pub(crate) const TICK_RATE: Duration = Duration::from_millis(100);

pub(crate) const LOG_FILE: &str = "snake.log";
pub(crate) const LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub(crate) const HEAD_SYMBOL: &str = "O";
pub(crate) const TAIL_SYMBOL: &str = "o";
pub(crate) const FRUIT_SYMBOL: &str = "%";
pub(crate) const WALL_SYMBOL: &str = "#";

pub(crate) const HEAD_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
pub(crate) const TAIL_STYLE: Style = Style::new().fg(Color::Green);
pub(crate) const FRUIT_STYLE: Style = Style::new().fg(Color::LightRed);

pub(crate) const BANNER_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
