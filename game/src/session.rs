use embedded_graphics::{prelude::Point, text::Alignment};
use rand::RngCore;

use crate::{
    config::{ConfigError, GameConfig},
    food::place_food,
    grid::{Cell, Occupancy},
    render::Renderer,
    sensor::TurnInput,
    snake::Snake,
};

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Alive,
    Dead,
}

/// What a call to [`GameSession::tick`] did.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    Died,
    /// The snake is dead and waiting for [`GameSession::revive`].
    Idle,
}

/// One running game: the snake, its food, and the random source both draw
/// from.
///
/// The session is the only writer of game state. `tick` runs the periodic
/// update, `revive` is the way back from [`GameState::Dead`]. Both draw
/// through a [`Renderer`] and hand its errors back after the model has been
/// updated, so a failed draw never leaves the game half stepped.
pub struct GameSession<R, const N: usize> {
    config: GameConfig,
    snake: Snake<N>,
    food: Option<Cell>,
    rng: R,
}

impl<R: RngCore, const N: usize> GameSession<R, N> {
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        Self::check(&config)?;
        let snake = Snake::new(config.grid, config.spawn, &mut rng);
        let food = place_food(&config.grid, &snake, &mut rng);
        Ok(Self {
            config,
            snake,
            food,
            rng,
        })
    }

    /// Resumes from an explicit snake and food position.
    pub fn with_state(
        config: GameConfig,
        snake: Snake<N>,
        food: Option<Cell>,
        rng: R,
    ) -> Result<Self, ConfigError> {
        Self::check(&config)?;
        if let Some(food) = food {
            if snake.occupies(food) || !config.grid.is_in_bounds(food) {
                return Err(ConfigError::FoodOnSnake(food));
            }
        }
        Ok(Self {
            config,
            snake,
            food,
            rng,
        })
    }

    fn check(config: &GameConfig) -> Result<(), ConfigError> {
        config.validate()?;
        if N < config.grid.cell_count() {
            return Err(ConfigError::CapacityTooSmall {
                capacity: N,
                cells: config.grid.cell_count(),
            });
        }
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake<N> {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn state(&self) -> GameState {
        if self.snake.is_alive() {
            GameState::Alive
        } else {
            GameState::Dead
        }
    }

    pub fn is_alive(&self) -> bool {
        self.snake.is_alive()
    }

    /// Draws the opening frame contents. The snake shows up with the first tick.
    pub fn start<D: Renderer>(&mut self, renderer: &mut D) -> Result<(), D::Error> {
        self.draw_food(renderer)
    }

    /// One periodic update.
    ///
    /// Reads the turn input once, steps the snake, then either shows the
    /// game-over screen or erases the vacated tail, handles food, and draws
    /// the new head. The frame is presented exactly once. Does nothing while
    /// dead.
    pub fn tick<I, D>(
        &mut self,
        input: &mut I,
        renderer: &mut D,
    ) -> Result<TickOutcome, D::Error>
    where
        I: TurnInput + ?Sized,
        D: Renderer,
    {
        if !self.snake.is_alive() {
            return Ok(TickOutcome::Idle);
        }

        let step = self.snake.advance(input.should_turn());

        if step.died {
            #[cfg(feature = "defmt")]
            defmt::info!("snake died at {}, length {}", step.new_head, self.snake.len());
            self.draw_game_over(renderer)?;
            return Ok(TickOutcome::Died);
        }

        let ate = self.food == Some(step.new_head);
        if ate {
            self.snake.grow();
            self.food = place_food(&self.config.grid, &self.snake, &mut self.rng);
            #[cfg(feature = "defmt")]
            defmt::debug!("food eaten, length {}, next food {}", self.snake.len(), self.food);
        }

        if let Some(tail) = step.vacated {
            renderer.fill_cell(tail, false)?;
        }
        if ate {
            // wipe the filled food block under the head
            renderer.fill_cell(step.new_head, false)?;
            self.draw_food(renderer)?;
        }
        renderer.draw_cell_outline(step.new_head)?;
        renderer.present()?;

        Ok(if ate {
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        })
    }

    /// Leaves [`GameState::Dead`]: clears the panel, respawns the snake and
    /// places fresh food. The cleared frame is presented by the next tick.
    pub fn revive<D: Renderer>(&mut self, renderer: &mut D) -> Result<(), D::Error> {
        if self.snake.is_alive() {
            return Ok(());
        }

        self.snake.reset(self.config.spawn, &mut self.rng);
        self.food = place_food(&self.config.grid, &self.snake, &mut self.rng);
        #[cfg(feature = "defmt")]
        defmt::info!("snake revived at {}", self.config.spawn);

        renderer.clear()?;
        self.draw_food(renderer)
    }

    fn draw_food<D: Renderer>(&self, renderer: &mut D) -> Result<(), D::Error> {
        match self.food {
            Some(food) => renderer.fill_cell(food, true),
            None => Ok(()),
        }
    }

    fn draw_game_over<D: Renderer>(&self, renderer: &mut D) -> Result<(), D::Error> {
        let size = self.config.grid.pixel_size();
        let (center_x, middle_y) = (size.width as i32 / 2, size.height as i32 / 2);

        renderer.clear()?;
        renderer.draw_text(
            "Game Over!",
            Point::new(center_x, middle_y - 8),
            Alignment::Center,
        )?;
        let length = crate::format!(24, "Snake length:{}", self.snake.len());
        renderer.draw_text(&length, Point::new(0, middle_y + 8), Alignment::Left)?;
        renderer.present()
    }
}
