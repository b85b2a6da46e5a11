use embedded_graphics::{
    Drawable,
    draw_target::DrawTarget,
    mono_font::{MonoTextStyle, ascii::FONT_5X8},
    pixelcolor::BinaryColor,
    prelude::{Point, Primitive},
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, StrokeAlignment},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use crate::grid::{Cell, Grid};

/// A monochrome draw target whose buffer is pushed to the panel on demand.
pub trait Present: DrawTarget<Color = BinaryColor> {
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// Drawing calls the game issues, keyed by grid cells.
pub trait Renderer {
    type Error;

    fn fill_cell(&mut self, cell: Cell, on: bool) -> Result<(), Self::Error>;
    fn draw_cell_outline(&mut self, cell: Cell) -> Result<(), Self::Error>;
    /// `position` is the top of the text line, in pixels.
    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        alignment: Alignment,
    ) -> Result<(), Self::Error>;
    fn clear(&mut self) -> Result<(), Self::Error>;
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// [`Renderer`] over any embedded-graphics target, scaling cells by the
/// grid's cell size.
pub struct CellRenderer<D> {
    target: D,
    grid: Grid,
}

impl<D: Present> CellRenderer<D> {
    pub fn new(target: D, grid: Grid) -> Self {
        Self { target, grid }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }
}

impl<D: Present> Renderer for CellRenderer<D> {
    type Error = D::Error;

    fn fill_cell(&mut self, cell: Cell, on: bool) -> Result<(), Self::Error> {
        self.grid
            .cell_rect(cell)
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::from(on)))
            .draw(&mut self.target)
    }

    fn draw_cell_outline(&mut self, cell: Cell) -> Result<(), Self::Error> {
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(BinaryColor::On)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        self.grid
            .cell_rect(cell)
            .into_styled(style)
            .draw(&mut self.target)
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        alignment: Alignment,
    ) -> Result<(), Self::Error> {
        let character_style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(Baseline::Top)
            .build();
        Text::with_text_style(text, position, character_style, text_style)
            .draw(&mut self.target)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.target.clear(BinaryColor::Off)
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.target.present()
    }
}
