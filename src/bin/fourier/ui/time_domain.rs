//! Time-domain signal widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use fourier_lab::SignalSample;

/// Render the sampled signal as a line chart over its own time grid
pub fn render_time_domain(frame: &mut Frame, area: Rect, signal: &SignalSample) {
    let block = Block::default()
        .title(" Time domain ")
        .borders(Borders::ALL);

    let data = signal.points();

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Red))
        .data(&data);

    let grid = signal.grid();
    // Leave headroom above the pulse; tall Dirac pulses rescale the axis
    let y_max = (signal.max_value() * 1.1).max(1.2);
    let y_min = signal.min_value().min(0.0) - 0.1;

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([grid.start(), grid.stop()])
                .labels(vec![
                    format!("{:.0}", grid.start()),
                    "t [s]".to_string(),
                    format!("{:.0}", grid.stop()),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([y_min, y_max])
                .labels(vec!["0".to_string(), format!("{y_max:.1}")])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
