use embassy_rp::{
    i2c::{Blocking, I2c},
    peripherals::I2C1,
};
use embedded_graphics::{
    Pixel,
    draw_target::DrawTarget,
    pixelcolor::BinaryColor,
    prelude::{OriginDimensions, Size},
};
use snake_game::Present;
use ssd1306::{
    I2CDisplayInterface, Ssd1306, mode::BufferedGraphicsMode, prelude::*,
    size::DisplaySize128x32,
};

pub const SCREEN_WIDTH: u32 = 128;
pub const SCREEN_HEIGHT: u32 = 32;

type OLED = Ssd1306<
    I2CInterface<I2c<'static, I2C1, Blocking>>,
    DisplaySize128x32,
    BufferedGraphicsMode<DisplaySize128x32>,
>;

pub type DisplayError = <OLED as DrawTarget>::Error;

/// The 128x32 SSD1306 with its frame buffer. Drawing only touches RAM,
/// [`Present::present`] pushes the buffer over I2C.
pub struct Display {
    oled: OLED,
}

pub fn init_display(i2c: I2c<'static, I2C1, Blocking>) -> Result<Display, DisplayError> {
    let interface = I2CDisplayInterface::new(i2c);
    let mut oled = Ssd1306::new(interface, DisplaySize128x32, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    oled.init()?;
    oled.clear_buffer();
    oled.flush()?;

    #[cfg(feature = "defmt")]
    defmt::info!("oled ready, {}x{}", SCREEN_WIDTH, SCREEN_HEIGHT);

    Ok(Display { oled })
}

impl OriginDimensions for Display {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl DrawTarget for Display {
    type Color = BinaryColor;
    type Error = DisplayError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.oled.draw_iter(pixels)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.oled.clear(color)
    }
}

impl Present for Display {
    fn present(&mut self) -> Result<(), Self::Error> {
        self.oled.flush()
    }
}
