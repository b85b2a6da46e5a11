use crate::config::GameConfig;

/// Distance sensor driver, e.g. an HC-SR04 behind a filter.
pub trait DistanceSensor {
    type Error;

    fn read_distance_cm(&mut self) -> Result<f32, Self::Error>;
}

/// Source of turn events, queried once per tick.
pub trait TurnInput {
    fn should_turn(&mut self) -> bool;
}

/// Middle value of a burst of readings, `None` for an empty burst.
///
/// Sorts `samples` in place. Even bursts yield the upper of the two middle
/// values.
pub fn median_cm(samples: &mut [f32]) -> Option<f32> {
    samples.sort_unstable_by(f32::total_cmp);
    samples.get(samples.len() / 2).copied()
}

/// Turns a distance reading into a turn event: something closer than the
/// threshold rotates the snake.
///
/// Failed or implausible readings count as "no turn" so a faulty sensor
/// never stalls the game.
pub struct ProximityTrigger<S> {
    sensor: S,
    threshold_cm: f32,
    max_range_cm: f32,
}

impl<S: DistanceSensor> ProximityTrigger<S> {
    pub fn new(sensor: S, threshold_cm: f32, max_range_cm: f32) -> Self {
        Self {
            sensor,
            threshold_cm,
            max_range_cm,
        }
    }

    pub fn from_config(sensor: S, config: &GameConfig) -> Self {
        Self::new(sensor, config.turn_threshold_cm, config.max_range_cm)
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }
}

impl<S: DistanceSensor> TurnInput for ProximityTrigger<S> {
    fn should_turn(&mut self) -> bool {
        match self.sensor.read_distance_cm() {
            Ok(cm) if (0.0..=self.max_range_cm).contains(&cm) => cm < self.threshold_cm,
            Ok(_cm) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("ignoring out of range distance {} cm", _cm);
                false
            }
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("distance sensor read failed");
                false
            }
        }
    }
}
