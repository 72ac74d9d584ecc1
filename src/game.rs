use crate::board::{Direction, Pos, Size};
use crate::consts::{FRUIT_SCORE, MAX_TAIL};
use crate::input::Command;
use log::info;
use rand::rngs::ThreadRng;
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::VecDeque;

#[derive(Debug)]
pub(crate) struct Snake {
    head: Pos,
    // Front is the segment right behind the head.
    tail: VecDeque<Pos>,
    direction: Option<Direction>,
}

impl Snake {
    fn new(head: Pos) -> Self {
        Snake {
            head,
            tail: VecDeque::new(),
            direction: None,
        }
    }

    pub(crate) fn head(&self) -> Pos {
        self.head
    }

    pub(crate) fn tail(&self) -> impl Iterator<Item = &Pos> {
        self.tail.iter()
    }

    /// Shifts every tail segment into its predecessor's cell and moves the
    /// head one step. Returns the cell left empty by the move.
    fn slither(&mut self, direction: Direction, arena_size: Size) -> Pos {
        self.tail.push_front(self.head);
        let vacated = self.tail.pop_back().unwrap_or(self.head);
        self.head = self.head.wrapped_add(direction.into(), arena_size);
        vacated
    }

    fn grow(&mut self, at: Pos) {
        if self.tail.len() < MAX_TAIL {
            self.tail.push_back(at);
        }
    }

    fn bites_itself(&self) -> bool {
        self.tail.contains(&self.head)
    }

    fn occupies(&self, pos: Pos) -> bool {
        self.head == pos || self.tail.contains(&pos)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Status {
    Playing,
    Crashed,
    /// No free cell was left for the next fruit
    BoardFull,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum StepResult {
    Idle,      // No direction chosen yet, or the game is over
    Ongoing,   // Normal movement
    Ate,       // Ate the fruit
    Collision, // Hit own tail, game over
}

#[derive(Debug)]
pub(crate) struct Game<R = ThreadRng> {
    rng: R,
    size: Size,
    snake: Snake,
    fruit: Option<Pos>,
    score: u32,
    status: Status,
    turned_this_tick: bool,
}

impl Game<ThreadRng> {
    pub(crate) fn new(size: Size) -> Self {
        Game::new_with_rng(size, rand::thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(size: Size, rng: R) -> Game<R> {
        let mut game = Game {
            rng,
            size,
            snake: Snake::new(size.center()),
            fruit: None,
            score: 0,
            status: Status::Playing,
            turned_this_tick: false,
        };
        if game.place_fruit().is_none() {
            game.status = Status::BoardFull;
        }
        game
    }

    /// Moves the fruit to a uniformly random cell the snake does not cover.
    fn place_fruit(&mut self) -> Option<Pos> {
        let snake = &self.snake;
        self.fruit = self
            .size
            .positions()
            .filter(|pos| !snake.occupies(*pos))
            .choose(&mut self.rng);
        self.fruit
    }

    pub(crate) fn handle_command(&mut self, command: Command) {
        match command {
            Command::Quit => {
                info!("Quit requested with score {}", self.score);
                self.status = Status::Quit;
            }
            Command::Turn(direction) => {
                if self.status != Status::Playing || self.turned_this_tick {
                    return;
                }
                if self.snake.direction.is_none() {
                    info!("Snake set off heading {:?}", direction);
                }
                self.snake.direction = Some(direction);
                self.turned_this_tick = true;
            }
        }
    }

    /// Runs one frame of game rules.
    pub(crate) fn advance(&mut self) -> StepResult {
        self.turned_this_tick = false;

        if self.status != Status::Playing {
            return StepResult::Idle;
        }
        let Some(direction) = self.snake.direction else {
            return StepResult::Idle;
        };

        let vacated = self.snake.slither(direction, self.size);

        if self.snake.bites_itself() {
            self.status = Status::Crashed;
            return StepResult::Collision;
        }

        if self.fruit == Some(self.snake.head) {
            self.score += FRUIT_SCORE;
            self.snake.grow(vacated);
            if self.place_fruit().is_none() {
                info!("No room left for fruit, final score {}", self.score);
                self.status = Status::BoardFull;
            }
            return StepResult::Ate;
        }

        StepResult::Ongoing
    }
}

impl<R> Game<R> {
    pub(crate) fn size(&self) -> Size {
        self.size
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn fruit(&self) -> Option<Pos> {
        self.fruit
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn status(&self) -> Status {
        self.status
    }
}

#[cfg(test)]
impl Game<rand::rngs::StdRng> {
    /// Builds a game in an arbitrary position with a fixed seed.
    pub(crate) fn from_parts(
        size: Size,
        head: Pos,
        tail: &[Pos],
        direction: Option<Direction>,
        fruit: Option<Pos>,
    ) -> Self {
        use rand::SeedableRng;

        Game {
            rng: rand::rngs::StdRng::seed_from_u64(7),
            size,
            snake: Snake {
                head,
                tail: tail.iter().copied().collect(),
                direction,
            },
            fruit,
            score: 0,
            status: Status::Playing,
            turned_this_tick: false,
        }
    }
}
