use embedded_graphics::{
    prelude::{Point, Size},
    primitives::Rectangle,
};

/// One square of the playing field, in cell units.
///
/// Coordinates are signed so a head that ran off the edge can still be
/// represented; every live segment satisfies [`Grid::is_in_bounds`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Anything that covers cells of the grid.
pub trait Occupancy {
    fn occupies(&self, cell: Cell) -> bool;
}

impl Occupancy for [Cell] {
    fn occupies(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

impl<const N: usize> Occupancy for [Cell; N] {
    fn occupies(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

/// Fixed cell grid laid over the pixel panel.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    cell_size: u16,
}

impl Grid {
    pub const fn new(width: u16, height: u16, cell_size: u16) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn cell_size(&self) -> u16 {
        self.cell_size
    }

    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as i32) < self.width as i32
            && (cell.y as i32) < self.height as i32
    }

    /// Every cell, column by column. Calling again starts over.
    pub fn all_cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let (width, height) = (self.width as i16, self.height as i16);
        (0..width).flat_map(move |x| (0..height).map(move |y| Cell::new(x, y)))
    }

    /// Panel area covered by the grid, in pixels.
    pub fn pixel_size(&self) -> Size {
        Size::new(
            self.width as u32 * self.cell_size as u32,
            self.height as u32 * self.cell_size as u32,
        )
    }

    /// Top left pixel of `cell`.
    pub fn cell_origin(&self, cell: Cell) -> Point {
        let size = self.cell_size as i32;
        Point::new(cell.x as i32 * size, cell.y as i32 * size)
    }

    pub fn cell_rect(&self, cell: Cell) -> Rectangle {
        Rectangle::new(
            self.cell_origin(cell),
            Size::new_equal(self.cell_size as u32),
        )
    }
}
