//! Status bar widget - lesson, parameter, line count and last rejection

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the status bar shows for the active scene
pub struct StatusLine<'a> {
    pub title: &'a str,
    pub parameter: String,
    /// Number of series coefficients, for line spectra
    pub coefficients: Option<usize>,
    pub sweeping: bool,
    pub rejection: Option<&'a str>,
}

/// Render the status bar
pub fn render_status(frame: &mut Frame, area: Rect, status: &StatusLine) {
    let block = Block::default().title(" fourier ").borders(Borders::ALL);

    let mut spans = vec![
        Span::styled(
            format!(" {}  ", status.title),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{}  ", status.parameter),
            Style::default().fg(Color::White),
        ),
    ];

    if let Some(count) = status.coefficients {
        spans.push(Span::styled(
            format!("# of coeffs: {count}  "),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if status.sweeping {
        spans.push(Span::styled("▶ Playing  ", Style::default().fg(Color::Green)));
    }

    if let Some(reason) = status.rejection {
        spans.push(Span::styled(
            format!("rejected: {reason}"),
            Style::default().fg(Color::Red),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
