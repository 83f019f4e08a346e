//! fourier - terminal viewer for the pulse and spectrum lessons
//!
//! Run with: cargo run --bin fourier

mod app;
mod logger;
mod ui;

use std::time::Duration;

use app::FourierLab;
use fourier_lab::{
    config::{DiracConfig, SeriesConfig},
    scene::{DiracLesson, Scene, SeriesLesson},
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let log_path = logger::init_logger()?;
    log::info!("logging to {}", log_path.display());

    let dirac = DiracConfig::default();
    let series = SeriesConfig::default();

    FourierLab::new()
        .frame_interval(Duration::from_millis(dirac.sweep.frame_interval_ms))
        .scene(Scene::new(DiracLesson::new(dirac)?)?)
        .scene(Scene::new(SeriesLesson::new(series)?)?)
        .run()
}
