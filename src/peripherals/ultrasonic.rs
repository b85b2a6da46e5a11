//! HC-SR04 style ultrasonic ranger: a 10 µs trigger pulse, then the echo
//! pin stays high for as long as the sound took to come back.

use embassy_rp::gpio::{Input, Output};
use embassy_time::{Duration, Instant, Timer, with_timeout};
use heapless::Vec;
use snake_game::{DistanceSensor, median_cm};

const TRIGGER_PULSE: Duration = Duration::from_micros(10);
const SETTLE: Duration = Duration::from_micros(2);
// ~4 m round trip plus margin
const ECHO_TIMEOUT: Duration = Duration::from_millis(25);
const SAMPLES: usize = 3;
const US_PER_CM: f32 = 58.0;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoError {
    /// Echo never went high after the trigger.
    NoEcho,
    /// Echo stayed high past the timeout.
    EchoStuck,
}

/// Measures asynchronously, then hands the latest reading to the game
/// through [`DistanceSensor`]. Each reading is handed out once.
pub struct Ultrasonic<'d> {
    trigger: Output<'d>,
    echo: Input<'d>,
    latest: Option<Result<f32, EchoError>>,
}

impl<'d> Ultrasonic<'d> {
    pub fn new(trigger: Output<'d>, echo: Input<'d>) -> Self {
        Self {
            trigger,
            echo,
            latest: None,
        }
    }

    /// A single unfiltered measurement.
    pub async fn ping(&mut self) -> Result<f32, EchoError> {
        self.trigger.set_low();
        Timer::after(SETTLE).await;
        self.trigger.set_high();
        Timer::after(TRIGGER_PULSE).await;
        self.trigger.set_low();

        with_timeout(ECHO_TIMEOUT, self.echo.wait_for_high())
            .await
            .map_err(|_| EchoError::NoEcho)?;
        let rise = Instant::now();
        with_timeout(ECHO_TIMEOUT, self.echo.wait_for_low())
            .await
            .map_err(|_| EchoError::EchoStuck)?;

        Ok(rise.elapsed().as_micros() as f32 / US_PER_CM)
    }

    /// Median of a few pings; a single failed ping is dropped.
    pub async fn measure(&mut self) {
        let mut samples: Vec<f32, SAMPLES> = Vec::new();
        let mut last_err = EchoError::NoEcho;

        for _ in 0..SAMPLES {
            match self.ping().await {
                Ok(cm) => {
                    let _ = samples.push(cm);
                }
                Err(e) => last_err = e,
            }
        }

        self.latest = Some(median_cm(&mut samples).ok_or(last_err));
    }
}

impl DistanceSensor for Ultrasonic<'_> {
    type Error = EchoError;

    fn read_distance_cm(&mut self) -> Result<f32, Self::Error> {
        self.latest.take().unwrap_or(Err(EchoError::NoEcho))
    }
}
