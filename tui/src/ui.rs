//! Widget Layout and Painting
//!
//! Pure functions from [`App`] state to a frame. Nothing here holds
//! state of its own; [`App::run`] is the only caller.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{BarChart, Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;

const BAR_WIDTH: u16 = 3;
const BAR_GAP: u16 = 1;

/// Paint the whole dashboard: title bar, site list, detail pane, chart.
pub fn draw(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(10),
            Constraint::Min(10),
        ])
        .split(frame.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    draw_title(frame, rows[0]);
    draw_site_list(frame, panes[0], app);
    draw_detail(frame, panes[1], app);
    draw_chart(frame, rows[2], app);
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Press up/down to scroll the list, Esc to exit.").block(
        Block::default()
            .borders(Borders::ALL)
            .title("Pressboard")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(title, area);
}

fn draw_site_list(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .urls()
        .iter()
        .map(|url| ListItem::new(url.as_str()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Sites"))
        .style(Style::default().fg(Color::Yellow))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow));

    let mut state = ListState::default();
    state.select(Some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_detail(frame: &mut Frame, area: Rect, app: &App) {
    let detail = Paragraph::new(app.selected_model().description)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Selected"));
    frame.render_widget(detail, area);
}

fn draw_chart(frame: &mut Frame, area: Rect, app: &App) {
    let labels: Vec<String> = (1..=app.chart().len()).map(|day| day.to_string()).collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .map(String::as_str)
        .zip(app.chart().iter().copied())
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Views, last 20 days"),
        )
        .data(data.as_slice())
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::White))
        .label_style(Style::default().fg(Color::Blue));
    frame.render_widget(chart, area);
}
