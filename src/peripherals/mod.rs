//! board peripherals the game reads from, currently the ultrasonic ranger
//!

use embassy_rp::{
    Peri,
    gpio::{Input, Level, Output, Pull},
    peripherals::{PIN_0, PIN_1},
};
use snake_game::{GameConfig, ProximityTrigger};

pub mod ultrasonic;
use ultrasonic::Ultrasonic;

pub type Trigger = ProximityTrigger<Ultrasonic<'static>>;

pub fn conf_ultrasonic(
    trigger: Peri<'static, PIN_0>,
    echo: Peri<'static, PIN_1>,
    config: &GameConfig,
) -> Trigger {
    let sensor = Ultrasonic::new(Output::new(trigger, Level::Low), Input::new(echo, Pull::Down));
    ProximityTrigger::from_config(sensor, config)
}

