//! TUI module for fourier
//!
//! Owns the parameter of every scene and redraws after each change.

mod spectrum;
mod status;
mod time_domain;

use std::time::{Duration, Instant};

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::info;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};

use fourier_lab::{
    scene::{Scene, SpectrumPlot, Sweep},
    Result,
};

use spectrum::{render_continuous, render_lines};
use status::{render_status, StatusLine};
use time_domain::render_time_domain;

/// Slider notches moved by Up/Down
const COARSE_STEPS: i32 = 10;

/// UI application state
pub struct UiApp {
    scenes: Vec<Scene>,
    active: usize,
    /// Running animation, if any
    sweep: Option<Sweep>,
    frame_interval: Duration,
    last_frame: Instant,
    /// Last rejected parameter, shown until the next accepted one
    rejection: Option<String>,
    should_quit: bool,
}

impl UiApp {
    pub fn new(scenes: Vec<Scene>, frame_interval: Duration) -> Self {
        Self {
            scenes,
            active: 0,
            sweep: None,
            frame_interval,
            last_frame: Instant::now(),
            rejection: None,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.advance_sweep();

            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn scene(&self) -> &Scene {
        &self.scenes[self.active]
    }

    fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scenes[self.active]
    }

    /// Apply the next sweep frame once per frame interval
    fn advance_sweep(&mut self) {
        if self.last_frame.elapsed() < self.frame_interval {
            return;
        }
        self.last_frame = Instant::now();

        let Some(value) = self.sweep.as_mut().and_then(|sweep| sweep.next()) else {
            self.sweep = None;
            return;
        };
        let result = self.scene_mut().set_parameter(value);
        self.record(result);
    }

    fn toggle_sweep(&mut self) {
        if self.sweep.take().is_some() {
            info!("sweep stopped at {}", self.scene().parameter());
            return;
        }
        self.sweep = self.scene().sweep();
        if let Some(sweep) = &self.sweep {
            info!("sweep started: {} frames", sweep.remaining());
        }
    }

    fn step(&mut self, steps: i32) {
        self.sweep = None;
        let result = self.scene_mut().step(steps);
        self.record(result);
    }

    fn record(&mut self, result: Result<()>) {
        self.rejection = result.err().map(|err| err.to_string());
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => self.step(-1),
            KeyCode::Right | KeyCode::Char('l') => self.step(1),
            KeyCode::Down | KeyCode::Char('j') => self.step(-COARSE_STEPS),
            KeyCode::Up | KeyCode::Char('k') => self.step(COARSE_STEPS),
            KeyCode::Char(' ') => self.toggle_sweep(),
            KeyCode::Tab => {
                self.sweep = None;
                self.rejection = None;
                self.active = (self.active + 1) % self.scenes.len();
            }
            _ => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let scene = self.scene();
        let plot = scene.plot();

        // Main layout: status, time domain, spectrum, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),      // Status bar
                Constraint::Percentage(35), // Time domain
                Constraint::Min(8),         // Spectrum
                Constraint::Length(1),      // Help bar
            ])
            .split(area);

        let coefficients = match &plot.spectrum {
            SpectrumPlot::Lines { coefficients, .. } => Some(coefficients.len()),
            SpectrumPlot::Continuous { .. } => None,
        };
        let status = StatusLine {
            title: scene.lesson().title(),
            parameter: scene.lesson().format_parameter(scene.parameter()),
            coefficients,
            sweeping: self.sweep.is_some(),
            rejection: self.rejection.as_deref(),
        };
        render_status(frame, chunks[0], &status);

        render_time_domain(frame, chunks[1], &plot.time);

        match &plot.spectrum {
            SpectrumPlot::Continuous {
                transform,
                limit_weight,
            } => render_continuous(frame, chunks[2], transform, *limit_weight),
            SpectrumPlot::Lines {
                coefficients,
                envelope,
            } => render_lines(frame, chunks[2], coefficients, envelope),
        }

        // Help bar
        let help = Paragraph::new(
            " [Q] Quit  [←/→] Step  [↑/↓] Step x10  [Space] Play/Stop  [Tab] Next lesson",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
