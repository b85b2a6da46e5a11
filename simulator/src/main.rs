//! Plays the game on a simulated 128x32 OLED. Holding space puts an
//! obstacle in front of the "sensor", one turn per tick while held.

use core::convert::Infallible;
use std::time::{Duration, Instant};

use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Size},
};
use embedded_graphics_simulator::{
    BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
    sdl2::Keycode,
};
use rand::{SeedableRng, rngs::StdRng};
use snake_game::{
    CellRenderer, DistanceSensor, GameConfig, GameSession, Present, ProximityTrigger,
};

const CONFIG: GameConfig = GameConfig::OLED_128X32;
const MAX_SEGMENTS: usize = CONFIG.grid.cell_count();

const NEAR_CM: f32 = 5.0;
const FAR_CM: f32 = 120.0;

/// Space bar as a distance sensor.
#[derive(Default)]
struct KeyboardSensor {
    obstacle: bool,
}

impl DistanceSensor for KeyboardSensor {
    type Error = Infallible;

    fn read_distance_cm(&mut self) -> Result<f32, Self::Error> {
        Ok(if self.obstacle { NEAR_CM } else { FAR_CM })
    }
}

struct Panel {
    display: SimulatorDisplay<BinaryColor>,
    window: Window,
}

impl OriginDimensions for Panel {
    fn size(&self) -> Size {
        self.display.size()
    }
}

impl DrawTarget for Panel {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.display.draw_iter(pixels)
    }
}

impl Present for Panel {
    fn present(&mut self) -> Result<(), Self::Error> {
        self.window.update(&self.display);
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::OledBlue)
        .scale(4)
        .build();
    let mut panel = Panel {
        display: SimulatorDisplay::new(CONFIG.grid.pixel_size()),
        window: Window::new("Sonar Snake", &output_settings),
    };
    // the window only opens on its first update
    panel.present()?;

    let mut screen = CellRenderer::new(panel, CONFIG.grid);
    let mut trigger = ProximityTrigger::from_config(KeyboardSensor::default(), &CONFIG);
    let mut session: GameSession<_, MAX_SEGMENTS> =
        GameSession::new(CONFIG, StdRng::from_entropy())?;
    session.start(&mut screen)?;

    let period = Duration::from_millis(CONFIG.tick_period_ms());
    let mut next_tick = Instant::now() + period;

    'running: loop {
        for event in screen.target_mut().window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown {
                    keycode: Keycode::Space,
                    ..
                } => trigger.sensor_mut().obstacle = true,
                SimulatorEvent::KeyUp {
                    keycode: Keycode::Space,
                    ..
                } => trigger.sensor_mut().obstacle = false,
                _ => {}
            }
        }

        let now = Instant::now();
        if now < next_tick {
            std::thread::sleep((next_tick - now).min(Duration::from_millis(10)));
            continue;
        }
        next_tick += period;

        if !session.is_alive() {
            session.revive(&mut screen)?;
        }
        session.tick(&mut trigger, &mut screen)?;
    }

    Ok(())
}
