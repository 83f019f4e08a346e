//! Spectrum widgets
//!
//! Continuous transforms are drawn as a line; Fourier series as stems with
//! markers, overlaid on the envelope they sample.

use std::f64::consts::PI;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use fourier_lab::{spectral::FourierCoefficientSet, Complex64, SignalSample};

fn axis_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn frequency_axis(start: f64, stop: f64) -> Axis<'static> {
    Axis::default()
        .bounds([start, stop])
        .labels(vec![
            format!("{start:.0}"),
            "f [Hz]".to_string(),
            format!("{stop:.0}"),
        ])
        .style(axis_style())
}

/// Render `X(f)` with the flat `F{δ} = 1` line faded in by `limit_weight`
pub fn render_continuous(
    frame: &mut Frame,
    area: Rect,
    transform: &SignalSample,
    limit_weight: f64,
) {
    let block = Block::default()
        .title(" Frequency domain: F{δ(t)} = 1 ")
        .borders(Borders::ALL);

    let grid = transform.grid();
    let data = transform.points();
    let limit = [(grid.start(), 1.0), (grid.stop(), 1.0)];

    // Terminal colours have no alpha; swap emphasis halfway through the fade
    let (curve_color, limit_color) = if limit_weight >= 0.5 {
        (Color::DarkGray, Color::LightBlue)
    } else {
        (Color::Blue, Color::DarkGray)
    };

    let curve = Dataset::default()
        .name("sinc(fε)")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(curve_color))
        .data(&data);

    let limit_line = Dataset::default()
        .name("limit: 1")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(limit_color))
        .data(&limit);

    let chart = Chart::new(vec![curve, limit_line])
        .block(block)
        .x_axis(frequency_axis(grid.start(), grid.stop()))
        .y_axis(
            Axis::default()
                .bounds([-0.2, 1.2])
                .labels(vec!["-0.2", "0", "1"])
                .style(axis_style()),
        );

    frame.render_widget(chart, area);
}

/// Render `|c_n|` and `∠c_n` stems over the scaled transform
pub fn render_lines(
    frame: &mut Frame,
    area: Rect,
    coefficients: &FourierCoefficientSet,
    envelope: &SignalSample<Complex64>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let grid = envelope.grid();

    let magnitude_lines = coefficients.magnitude_points();
    let magnitude_envelope = envelope.magnitude().points();
    let peak = magnitude_envelope
        .iter()
        .map(|(_, m)| *m)
        .fold(0.0, f64::max)
        .max(1e-3);

    let magnitude_chart = Chart::new(vec![
        Dataset::default()
            .name("Fourier series")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(Color::Yellow))
            .data(&magnitude_lines),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Yellow))
            .data(&magnitude_lines),
        Dataset::default()
            .name("|X(f)|/T")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&magnitude_envelope),
    ])
    .block(
        Block::default()
            .title(" Fourier series magnitude |Cₙ| ")
            .borders(Borders::ALL),
    )
    .x_axis(frequency_axis(grid.start(), grid.stop()))
    .y_axis(
        Axis::default()
            .bounds([0.0, peak * 1.1])
            .labels(vec!["0".to_string(), format!("{peak:.3}")])
            .style(axis_style()),
    );
    frame.render_widget(magnitude_chart, chunks[0]);

    let phase_lines = coefficients.phase_points();
    let phase_envelope = envelope.phase().points();

    let phase_chart = Chart::new(vec![
        Dataset::default()
            .name("∠Cₙ")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(Color::Green))
            .data(&phase_lines),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Green))
            .data(&phase_lines),
        Dataset::default()
            .name("∠X(f)")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::DarkGray))
            .data(&phase_envelope),
    ])
    .block(
        Block::default()
            .title(" Fourier series phase [rad] ")
            .borders(Borders::ALL),
    )
    .x_axis(frequency_axis(grid.start(), grid.stop()))
    .y_axis(
        Axis::default()
            .bounds([-PI, PI])
            .labels(vec!["-π", "0", "π"])
            .style(axis_style()),
    );
    frame.render_widget(phase_chart, chunks[1]);
}
