//! FourierLab - application builder and runner

use std::time::Duration;

use color_eyre::eyre::{eyre, Result as EyreResult};
use log::info;

use fourier_lab::scene::Scene;

use super::ui::UiApp;

/// Main application builder
pub struct FourierLab {
    scenes: Vec<Scene>,
    frame_interval: Duration,
}

impl FourierLab {
    pub fn new() -> Self {
        Self {
            scenes: Vec::new(),
            frame_interval: Duration::from_millis(50),
        }
    }

    /// Time between sweep frames
    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Add a lesson scene; `Tab` cycles through them in insertion order
    pub fn scene(mut self, scene: Scene) -> Self {
        self.scenes.push(scene);
        self
    }

    /// Take over the terminal until the user quits
    pub fn run(self) -> EyreResult<()> {
        if self.scenes.is_empty() {
            return Err(eyre!("no scenes to show"));
        }

        for scene in &self.scenes {
            let lesson = scene.lesson();
            info!(
                "scene '{}': {} in [{}, {}], start {}",
                lesson.title(),
                lesson.parameter_label(),
                lesson.range().min,
                lesson.range().max,
                scene.parameter()
            );
        }

        let mut terminal = ratatui::init();
        let mut ui = UiApp::new(self.scenes, self.frame_interval);
        let result = ui.run(&mut terminal);
        ratatui::restore();

        info!("exiting");
        result
    }
}

impl Default for FourierLab {
    fn default() -> Self {
        Self::new()
    }
}
