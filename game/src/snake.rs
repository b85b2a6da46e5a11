use heapless::Vec;
use rand::RngCore;

use crate::{
    direction::Direction,
    grid::{Cell, Grid, Occupancy},
};

/// What one step of the snake did.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceResult {
    pub new_head: Cell,
    /// Former tail cell, if no segment covers it after the step.
    pub vacated: Option<Cell>,
    pub died: bool,
}

/// Snake body stored tail first, head last, in at most `N` segments.
#[derive(Debug, Clone)]
pub struct Snake<const N: usize> {
    grid: Grid,
    segments: Vec<Cell, N>,
    heading: Direction,
    alive: bool,
}

impl<const N: usize> Snake<N> {
    /// A one segment snake at `spawn` with a random heading.
    pub fn new<R: RngCore + ?Sized>(grid: Grid, spawn: Cell, rng: &mut R) -> Self {
        Self::with_heading(grid, spawn, Direction::random(rng))
    }

    pub fn with_heading(grid: Grid, spawn: Cell, heading: Direction) -> Self {
        const { assert!(N > 0, "snake needs room for at least one segment") };
        debug_assert!(grid.is_in_bounds(spawn));

        let mut segments = Vec::new();
        let _ = segments.push(spawn);
        Self {
            grid,
            segments,
            heading,
            alive: true,
        }
    }

    /// Builds a snake from an explicit body, tail first.
    ///
    /// Returns `None` for an empty body, a body longer than `N`, or one that
    /// leaves the grid.
    pub fn from_segments(grid: Grid, segments: &[Cell], heading: Direction) -> Option<Self> {
        if segments.is_empty() || !segments.iter().all(|c| grid.is_in_bounds(*c)) {
            return None;
        }
        Some(Self {
            grid,
            segments: Vec::from_slice(segments).ok()?,
            heading,
            alive: true,
        })
    }

    pub fn head(&self) -> Cell {
        self.segments[self.segments.len() - 1]
    }

    pub fn tail(&self) -> Cell {
        self.segments[0]
    }

    pub fn segments(&self) -> &[Cell] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Moves the head one cell along the heading, rotating it first if a
    /// turn was requested.
    ///
    /// The body shifts before the collision test, so the cell the tail leaves
    /// this step is free for the head. The new head is committed even when
    /// the step kills the snake. A dead snake does not move.
    pub fn advance(&mut self, turn_requested: bool) -> AdvanceResult {
        if !self.alive {
            return AdvanceResult {
                new_head: self.head(),
                vacated: None,
                died: true,
            };
        }

        if turn_requested {
            self.heading = self.heading.next();
        }
        let (dx, dy) = self.heading.delta();
        let new_head = self.head().offset(dx, dy);
        let old_tail = self.tail();

        let len = self.segments.len();
        self.segments.copy_within(1..len, 0);

        let died = !self.grid.is_in_bounds(new_head) || self.occupies(new_head);

        self.segments[len - 1] = new_head;
        if died {
            self.alive = false;
        }

        AdvanceResult {
            new_head,
            vacated: (!self.occupies(old_tail)).then_some(old_tail),
            died,
        }
    }

    /// Adds a segment on top of the head. The extra segment unfolds behind
    /// the head over the next steps, keeping the tail one step longer.
    pub fn grow(&mut self) {
        let head = self.head();
        if self.segments.push(head).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("snake already fills {} segments", N);
        }
    }

    /// Back to a single live segment at `spawn` with a fresh random heading.
    pub fn reset<R: RngCore + ?Sized>(&mut self, spawn: Cell, rng: &mut R) {
        debug_assert!(self.grid.is_in_bounds(spawn));
        self.segments.clear();
        let _ = self.segments.push(spawn);
        self.heading = Direction::random(rng);
        self.alive = true;
    }
}

impl<const N: usize> Occupancy for Snake<N> {
    fn occupies(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }
}
