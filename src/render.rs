use crate::board::Pos;
use crate::consts::{
    BANNER_STYLE, FRUIT_STYLE, FRUIT_SYMBOL, HEAD_STYLE, HEAD_SYMBOL, TAIL_STYLE, TAIL_SYMBOL,
    WALL_SYMBOL,
};
use crate::game::{Game, Status};
use ratatui::{
    prelude::*,
    symbols::border,
    widgets::{Block, Clear, Paragraph},
};

const WALL: border::Set = border::Set {
    top_left: WALL_SYMBOL,
    top_right: WALL_SYMBOL,
    bottom_left: WALL_SYMBOL,
    bottom_right: WALL_SYMBOL,
    vertical_left: WALL_SYMBOL,
    vertical_right: WALL_SYMBOL,
    horizontal_top: WALL_SYMBOL,
    horizontal_bottom: WALL_SYMBOL,
};

pub(crate) fn draw<R>(frame: &mut Frame, game: &Game<R>) {
    frame.render_widget(game, frame.area());
}

/// Writes one board cell, dropping anything that falls outside `area`.
fn put(buf: &mut Buffer, area: Rect, pos: Pos, symbol: &str, style: Style) {
    if pos.x >= area.width || pos.y >= area.height {
        return;
    }
    if let Some(cell) = buf.cell_mut((area.x + pos.x, area.y + pos.y)) {
        cell.set_symbol(symbol).set_style(style);
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = self.size();
        let [board_area, score_area] = Layout::vertical([
            Constraint::Length(size.height + 2), // Board + walls
            Constraint::Length(1),               // Score
        ])
        .areas(area);
        let board_area = Rect {
            width: board_area.width.min(size.width + 2),
            ..board_area
        };

        let block = Block::bordered().border_set(WALL);
        let inner = block.inner(board_area);
        block.render(board_area, buf);

        if let Some(fruit) = self.fruit() {
            put(buf, inner, fruit, FRUIT_SYMBOL, FRUIT_STYLE);
        }
        for &segment in self.snake().tail() {
            put(buf, inner, segment, TAIL_SYMBOL, TAIL_STYLE);
        }
        put(buf, inner, self.snake().head(), HEAD_SYMBOL, HEAD_STYLE);

        Line::from(format!("Score: {}", self.score())).render(score_area, buf);

        let headline = match self.status() {
            Status::Crashed => "GAME OVER",
            Status::BoardFull => "BOARD FULL",
            Status::Playing | Status::Quit => return,
        };
        let [banner] = Layout::vertical([Constraint::Length(3)])
            .flex(layout::Flex::Center)
            .areas(inner);
        Clear.render(banner, buf);
        Paragraph::new(vec![
            Line::from(headline),
            Line::from(format!("Score: {}", self.score())),
            Line::from("Any key to exit"),
        ])
        .alignment(Alignment::Center)
        .style(BANNER_STYLE)
        .render(banner, buf);
    }
}
