use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let movie = match &app.detail {
        Some(m) => m,
        None => return,
    };

    // Layout: header(5) + overview(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    // ── Metadata header ──
    let rating = movie
        .vote_average
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| "—".to_string());
    let meta_lines = vec![
        Line::from(vec![
            Span::styled(" Title: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                &movie.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Released: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                movie.release_date.as_deref().unwrap_or("unknown"),
                Style::default().fg(Color::White),
            ),
            Span::raw("   "),
            Span::styled("Rating: ", Style::default().fg(Color::DarkGray)),
            Span::styled(rating, Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled(" Poster: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                movie.poster_url(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
    ];

    let meta_block = Paragraph::new(meta_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Movie Detail "),
    );
    frame.render_widget(meta_block, chunks[0]);

    // ── Overview ──
    let overview = if movie.overview.is_empty() {
        "No overview available."
    } else {
        movie.overview.as_str()
    };
    let content = Paragraph::new(overview)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Overview "),
        );
    frame.render_widget(content, chunks[1]);

    // ── Status bar ──
    let status_line = Line::from(vec![
        Span::styled(
            " ↑↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Scroll  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Back  "),
        Span::styled(
            &app.status_msg,
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(status_line), chunks[2]);
}
