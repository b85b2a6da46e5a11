#![no_std]
#![no_main]

use core::sync::atomic::{AtomicBool, Ordering};
use embassy_executor::Spawner;
use embassy_rp::{
    clocks::RoscRng,
    i2c::{self, I2c},
    watchdog::{ResetReason, Watchdog},
};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::{Duration, Ticker, Timer};
use snake_game::{CellRenderer, GameConfig, GameSession};
use {defmt_rtt as _, panic_probe as _};

use crate::{
    display::{Display, init_display},
    peripherals::{Trigger, conf_ultrasonic},
};

mod display;
mod peripherals;

const CONFIG: GameConfig = GameConfig::OLED_128X32;
const MAX_SEGMENTS: usize = CONFIG.grid.cell_count();
const IDLE_POLL_MS: u64 = 10;

type Session = GameSession<RoscRng, MAX_SEGMENTS>;
type Screen = CellRenderer<Display>;

// written by the game task only, polled by the idle loop
static ALIVE: AtomicBool = AtomicBool::new(true);
// idle loop -> game task, handled at the start of the next tick
static REVIVE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

#[embassy_executor::task]
async fn watchdog_task(mut watchdog: Watchdog) {
    if let Some(reason) = watchdog.reset_reason() {
        let _reason = match reason {
            ResetReason::Forced => "forced",
            ResetReason::TimedOut => "timed out",
        };
        #[cfg(feature = "defmt")]
        defmt::error!("Watchdog reset reason: {}", _reason);
    }

    watchdog.start(Duration::from_secs(3));

    let mut ticker = Ticker::every(Duration::from_secs(1));
    loop {
        watchdog.feed();
        ticker.next().await;
    }
}

// sole owner of the session: every mutation, revival included, happens here
#[embassy_executor::task]
async fn game_task(mut session: Session, mut trigger: Trigger, mut screen: Screen) {
    let mut ticker = Ticker::every(Duration::from_millis(CONFIG.tick_period_ms()));
    loop {
        ticker.next().await;
        trigger.sensor_mut().measure().await;

        if REVIVE.try_take().is_some() {
            if let Err(_e) = session.revive(&mut screen) {
                #[cfg(feature = "defmt")]
                defmt::warn!("revive draw failed: {}", defmt::Debug2Format(&_e));
            }
        }

        match session.tick(&mut trigger, &mut screen) {
            Ok(_outcome) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("tick: {}", _outcome);
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("frame draw failed: {}", defmt::Debug2Format(&_e));
            }
        }

        ALIVE.store(session.is_alive(), Ordering::Release);
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    spawner
        .spawn(watchdog_task(Watchdog::new(p.WATCHDOG)))
        .unwrap();

    // oled on i2c1
    let mut config = i2c::Config::default();
    config.frequency = 100_000;
    let i2c1 = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, config);
    let display = init_display(i2c1).unwrap();

    let trigger = conf_ultrasonic(p.PIN_0, p.PIN_1, &CONFIG);

    let mut screen = CellRenderer::new(display, CONFIG.grid);
    let mut session = Session::new(CONFIG, RoscRng).unwrap();
    session.start(&mut screen).unwrap();

    #[cfg(feature = "defmt")]
    defmt::info!(
        "snake on {}x{} cells, {} ticks/s",
        CONFIG.grid.width(),
        CONFIG.grid.height(),
        CONFIG.tick_hz
    );

    spawner
        .spawn(game_task(session, trigger, screen))
        .unwrap();

    // idle loop: only watches for a dead snake and asks for a revival
    loop {
        if !ALIVE.load(Ordering::Acquire) {
            REVIVE.signal(());
        }
        Timer::after_millis(IDLE_POLL_MS).await;
    }
}
