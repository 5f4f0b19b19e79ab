use anyhow::Result;
use crossterm::{
    event::{Event, KeyCode},
    execute,
    terminal::*,
};
use ratatui::{
    prelude::*,
    widgets::*,
    widgets::BorderType,
};
use std::path::PathBuf;

use crate::analysis::{self, Issue};
use crate::telemetry::loader::CachedLoader;

/// Full-screen terminal dashboard over one sensor CSV: raw readings on the
/// left, maintenance recommendations on the right, green banner when there
/// is nothing to fix.
pub async fn start_dashboard(source: PathBuf) -> Result<()> {
    let mut loader = CachedLoader::new();
    let mut readings = loader.load(&source).unwrap_or_default();
    let mut report = analysis::analyze_readings(&readings);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        terminal.draw(|f| {
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Header
                    Constraint::Min(5),    // Main content
                    Constraint::Length(3), // Footer
                ])
                .split(f.size());

            // Header
            let header_block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::new().fg(Color::LightBlue))
                .border_type(BorderType::Thick);

            f.render_widget(
                Paragraph::new(format!("Machine Sentry :: {}", source.display()))
                    .style(Style::new().fg(Color::LightBlue))
                    .block(header_block)
                    .alignment(Alignment::Center),
                main_layout[0],
            );

            let content_layout = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(main_layout[1]);

            // Raw readings panel
            let rows: Vec<Row> = readings
                .iter()
                .map(|r| {
                    Row::new(vec![
                        r.machine_id.clone(),
                        r.timestamp.clone(),
                        format!("{:.1}", r.temperature),
                        format!("{:.2}", r.vibration),
                    ])
                })
                .collect();

            let table = Table::new(
                rows,
                [
                    Constraint::Length(12),
                    Constraint::Length(20),
                    Constraint::Length(8),
                    Constraint::Length(10),
                ],
            )
            .header(
                Row::new(vec!["Machine", "Timestamp", "Temp", "Vibration"])
                    .style(Style::new().add_modifier(Modifier::BOLD)),
            )
            .block(
                Block::default()
                    .title(format!("Raw Sensor Data ({})", readings.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::new().fg(Color::LightBlue)),
            );

            // Recommendations panel
            let rec_block = Block::default()
                .title(format!(
                    "Maintenance Recommendations ({})",
                    report.recommendations.len()
                ))
                .borders(Borders::ALL)
                .border_style(Style::new().fg(Color::LightBlue));

            f.render_widget(table, content_layout[0]);

            if report.all_clear {
                f.render_widget(
                    Paragraph::new("All machines are operating within safe parameters.")
                        .style(Style::new().fg(Color::Green))
                        .block(rec_block)
                        .wrap(Wrap { trim: true }),
                    content_layout[1],
                );
            } else {
                let items: Vec<ListItem> = report
                    .anomalies
                    .iter()
                    .zip(&report.recommendations)
                    .map(|(anomaly, rec)| {
                        let style = match anomaly.issue {
                            Issue::Overheating => Style::new().fg(Color::Red),
                            Issue::HighVibration => Style::new().fg(Color::Yellow),
                        };
                        ListItem::new(Span::styled(format!("▶ {}", rec), style))
                    })
                    .collect();

                f.render_widget(List::new(items).block(rec_block), content_layout[1]);
            }

            // Footer
            let footer = Paragraph::new(Line::from(vec![
                Span::styled("Q: Quit", Style::new().fg(Color::LightYellow)),
                Span::raw(" | "),
                Span::styled("R: Reload", Style::new().fg(Color::LightGreen)),
            ]))
            .alignment(Alignment::Center);

            f.render_widget(footer, main_layout[2]);
        })?;

        if crossterm::event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = crossterm::event::read()? {
                match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Char('r') => {
                        if let Ok(latest) = loader.load(&source) {
                            readings = latest;
                            report = analysis::analyze_readings(&readings);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    Ok(())
}
