use std::collections::{HashMap, HashSet};
use std::convert::Infallible;

use embedded_graphics::{prelude::Point, text::Alignment};
use rand::{Rng, SeedableRng, rngs::StdRng};
use snake_game::{
    Cell, Direction, GameConfig, GameSession, GameState, Grid, Occupancy, Renderer, Snake,
    TickOutcome, TurnInput,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Outline,
    Filled,
}

/// Remembers what each cell of the panel shows after the drawing calls.
#[derive(Default)]
struct ShadowPanel {
    cells: HashMap<Cell, Mark>,
    lines: Vec<String>,
    presents: usize,
}

impl ShadowPanel {
    fn cells_with(&self, mark: Mark) -> HashSet<Cell> {
        self.cells
            .iter()
            .filter(|(_, m)| **m == mark)
            .map(|(c, _)| *c)
            .collect()
    }
}

impl Renderer for ShadowPanel {
    type Error = Infallible;

    fn fill_cell(&mut self, cell: Cell, on: bool) -> Result<(), Infallible> {
        if on {
            self.cells.insert(cell, Mark::Filled);
        } else {
            self.cells.remove(&cell);
        }
        Ok(())
    }

    fn draw_cell_outline(&mut self, cell: Cell) -> Result<(), Infallible> {
        self.cells.insert(cell, Mark::Outline);
        Ok(())
    }

    fn draw_text(&mut self, text: &str, _: Point, _: Alignment) -> Result<(), Infallible> {
        self.lines.push(text.to_owned());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Infallible> {
        self.cells.clear();
        self.lines.clear();
        Ok(())
    }

    fn present(&mut self) -> Result<(), Infallible> {
        self.presents += 1;
        Ok(())
    }
}

struct RandomTurns(StdRng);

impl TurnInput for RandomTurns {
    fn should_turn(&mut self) -> bool {
        self.0.gen_bool(0.3)
    }
}

struct NoTurns;

impl TurnInput for NoTurns {
    fn should_turn(&mut self) -> bool {
        false
    }
}

#[test]
fn long_play_keeps_panel_and_model_in_step() {
    let grid = Grid::new(6, 6, 4);
    let config = GameConfig::with_grid(grid);
    let mut session: GameSession<_, 36> =
        GameSession::new(config, StdRng::seed_from_u64(2024)).unwrap();
    let mut panel = ShadowPanel::default();
    let mut turns = RandomTurns(StdRng::seed_from_u64(99));

    session.start(&mut panel).unwrap();

    let mut deaths = 0;
    let mut meals = 0;
    let mut last_len = session.snake().len();
    let mut last_heading = session.snake().heading();

    for _ in 0..5_000 {
        if !session.is_alive() {
            session.revive(&mut panel).unwrap();
            assert_eq!(session.snake().len(), 1);
            assert_eq!(session.snake().head(), config.spawn);
            last_len = 1;
            last_heading = session.snake().heading();
        }

        let presents = panel.presents;
        let outcome = session.tick(&mut turns, &mut panel).unwrap();
        assert_eq!(panel.presents, presents + 1, "one present per tick");

        let snake = session.snake();
        let heading = snake.heading();
        assert!(heading == last_heading || heading == last_heading.next());
        last_heading = heading;

        match outcome {
            TickOutcome::Died => {
                deaths += 1;
                assert_eq!(session.state(), GameState::Dead);
                assert!(panel.cells.is_empty());
                assert_eq!(panel.lines[0], "Game Over!");
                assert_eq!(panel.lines[1], format!("Snake length:{}", snake.len()));
            }
            TickOutcome::Moved | TickOutcome::Ate => {
                if outcome == TickOutcome::Ate {
                    meals += 1;
                    assert_eq!(snake.len(), last_len + 1);
                } else {
                    assert_eq!(snake.len(), last_len);
                }
                last_len = snake.len();

                assert!(snake.segments().iter().all(|c| grid.is_in_bounds(*c)));
                let body: HashSet<Cell> = snake.segments().iter().copied().collect();
                assert_eq!(panel.cells_with(Mark::Outline), body);

                let food: HashSet<Cell> = session.food().into_iter().collect();
                assert_eq!(panel.cells_with(Mark::Filled), food);
                if let Some(food) = session.food() {
                    assert!(!snake.occupies(food));
                }
            }
            TickOutcome::Idle => unreachable!("revived before every tick"),
        }
    }

    assert!(deaths > 10, "only {deaths} deaths");
    assert!(meals > 10, "only {meals} meals");
}

#[test]
fn spawn_scenario_on_small_grid() {
    let grid = Grid::new(4, 4, 4);
    let config = GameConfig::with_grid(grid).with_spawn(Cell::new(2, 2));
    let snake = Snake::<16>::with_heading(grid, Cell::new(2, 2), Direction::Right);
    let mut session =
        GameSession::with_state(config, snake, Some(Cell::new(0, 0)), StdRng::seed_from_u64(8))
            .unwrap();
    let mut panel = ShadowPanel::default();

    assert_eq!(session.tick(&mut NoTurns, &mut panel).unwrap(), TickOutcome::Moved);
    assert_eq!(session.snake().head(), Cell::new(3, 2));
    assert_eq!(session.snake().len(), 1);
    assert!(session.is_alive());
}

#[test]
fn running_off_the_bottom_row_ends_the_game() {
    let grid = Grid::new(4, 4, 4);
    let config = GameConfig::with_grid(grid);
    let body = [Cell::new(1, 1), Cell::new(1, 2), Cell::new(1, 3)];
    let snake = Snake::<16>::from_segments(grid, &body, Direction::Down).unwrap();
    let mut session =
        GameSession::with_state(config, snake, Some(Cell::new(3, 3)), StdRng::seed_from_u64(8))
            .unwrap();
    let mut panel = ShadowPanel::default();

    assert_eq!(session.tick(&mut NoTurns, &mut panel).unwrap(), TickOutcome::Died);
    assert!(!session.is_alive());
    assert_eq!(panel.lines, ["Game Over!", "Snake length:3"]);
}

#[test]
fn revival_gives_fresh_single_segment_and_food() {
    let grid = Grid::new(4, 4, 4);
    let config = GameConfig::with_grid(grid).with_spawn(Cell::new(1, 1));
    let mut panel = ShadowPanel::default();

    for seed in 0..20 {
        let snake = Snake::<16>::with_heading(grid, Cell::new(0, 3), Direction::Left);
        let rng = StdRng::seed_from_u64(seed);
        let mut session =
            GameSession::with_state(config, snake, Some(Cell::new(3, 3)), rng).unwrap();
        assert_eq!(session.tick(&mut NoTurns, &mut panel).unwrap(), TickOutcome::Died);

        session.revive(&mut panel).unwrap();

        assert!(session.is_alive());
        assert_eq!(session.snake().segments(), &[Cell::new(1, 1)]);
        let food = session.food().unwrap();
        assert_ne!(food, Cell::new(1, 1));
        assert_eq!(panel.cells_with(Mark::Filled), HashSet::from([food]));
    }
}
