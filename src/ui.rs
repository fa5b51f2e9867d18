use std::{
    fmt,
    io::{self, Stdout},
    sync::mpsc::{self, Receiver},
    thread,
    time::{Duration, Instant},
};

use crate::content;
use crate::dashboard::{Action, Dashboard, Tab};
use crate::stats::SummaryStatistics;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event as CEvent, KeyEvent},
    execute, terminal,
};
use tracing::{debug, info};
use tui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Span, Spans},
    widgets::{
        Axis, Block, BorderType, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table,
        Tabs, Wrap,
    },
    Frame, Terminal,
};

enum Event<I> {
    Input(I),
    Tick,
}

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    receiver: Receiver<Event<KeyEvent>>,
}

impl fmt::Debug for Tui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Tui>")
    }
}

impl Tui {
    pub fn new() -> Result<Tui> {
        terminal::enable_raw_mode().context("unable to go to raw mode")?;
        let terminal = leave_raw_mode_on_error(open_terminal(), terminal::disable_raw_mode)?;

        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(200);
        // Setup event loop for catching key input
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or_else(|| Duration::from_secs(0));

                if event::poll(timeout).expect("poll works") {
                    if let CEvent::Key(key) = event::read().expect("can read events") {
                        if tx.send(Event::Input(key)).is_err() {
                            return;
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Ok(Tui {
            terminal,
            receiver: rx,
        })
    }

    /// Draws the dashboard until the user quits, then restores the terminal.
    pub fn run(&mut self, dashboard: &mut Dashboard) -> Result<()> {
        info!("starting dashboard");
        let result = self.event_loop(dashboard);
        self.restore()?;
        result
    }

    fn event_loop(&mut self, dashboard: &mut Dashboard) -> Result<()> {
        loop {
            self.terminal
                .draw(|frame| draw(frame, dashboard))
                .context("unable to draw tui")?;

            match self.receiver.recv()? {
                Event::Input(event) => {
                    if dashboard.handle_key(event.code)? == Action::Quit {
                        debug!("quit requested");
                        return Ok(());
                    }
                }
                Event::Tick => {}
            };
        }
    }

    fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), terminal::LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

fn open_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)
        .context("unable to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

/// Runs `disable` when terminal setup failed after raw mode was enabled.
fn leave_raw_mode_on_error<T>(
    setup: Result<T>,
    disable: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    if setup.is_err() {
        // the setup error is the one worth reporting
        let _ = disable();
    }
    setup
}

pub fn draw<B: Backend>(frame: &mut Frame<B>, dashboard: &Dashboard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(4),
            ]
            .as_ref(),
        )
        .split(frame.size());

    render_header(frame, chunks[0]);
    render_tabs(frame, chunks[1], dashboard.tab);
    match dashboard.tab {
        Tab::Intro => render_intro(frame, chunks[2]),
        Tab::Statistics => render_statistics(frame, chunks[2], dashboard),
        Tab::Forecast => render_forecast(frame, chunks[2], dashboard),
    }
    render_footer(frame, chunks[3]);
}

fn bordered(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::White))
        .title(title)
        .border_type(BorderType::Plain)
}

fn bold(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
}

fn render_header<B: Backend>(frame: &mut Frame<B>, rect: Rect) {
    let header = Paragraph::new(vec![
        Spans::from(Span::styled(
            content::TITLE,
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )),
        Spans::from(content::SUBTITLE),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, rect);
}

fn render_tabs<B: Backend>(frame: &mut Frame<B>, rect: Rect, selected: Tab) {
    let titles = Tab::ALL
        .iter()
        .map(|tab| Spans::from(tab.title()))
        .collect::<Vec<_>>();
    let tabs = Tabs::new(titles)
        .select(selected.index())
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, rect);
}

fn render_code<B: Backend>(frame: &mut Frame<B>, rect: Rect, title: &str, code: &str) {
    let lines = code.lines().map(Spans::from).collect::<Vec<_>>();
    let block = Paragraph::new(lines)
        .style(Style::default().fg(Color::LightGreen))
        .block(bordered(title));
    frame.render_widget(block, rect);
}

fn render_intro<B: Backend>(frame: &mut Frame<B>, rect: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(5),
                Constraint::Length(5),
                Constraint::Min(4),
            ]
            .as_ref(),
        )
        .split(rect);

    let intro = Paragraph::new(content::INTRO)
        .wrap(Wrap { trim: true })
        .block(bordered(content::INTRO_HEADING));
    frame.render_widget(intro, chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ]
            .as_ref(),
        )
        .split(chunks[1]);
    for (feature, card) in content::FEATURES.iter().zip(cards.into_iter()) {
        let paragraph = Paragraph::new(feature.description)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(bordered(feature.title));
        frame.render_widget(paragraph, card);
    }

    render_code(
        frame,
        chunks[2],
        content::LIBRARIES_HEADING,
        content::LIBRARIES_CODE,
    );
}

fn summary_table<'a>(title: &'a str, stats: &SummaryStatistics, color: Color) -> Table<'a> {
    let rows = stats
        .rows()
        .iter()
        .map(|(label, value)| {
            Row::new(vec![
                Cell::from(bold(*label)),
                Cell::from(Span::raw(value.clone())),
            ])
        })
        .collect::<Vec<Row>>();

    Table::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(color))
                .title(title)
                .border_type(BorderType::Plain),
        )
        .widths(&[Constraint::Percentage(50), Constraint::Percentage(50)])
}

fn render_statistics<B: Backend>(frame: &mut Frame<B>, rect: Rect, dashboard: &Dashboard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Length(10),
                Constraint::Min(4),
            ]
            .as_ref(),
        )
        .split(rect);
    let heading = Paragraph::new(Spans::from(bold(content::STATISTICS_HEADING)));
    frame.render_widget(heading, chunks[0]);

    let tables = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(chunks[1]);

    frame.render_widget(
        summary_table(
            content::TEMPERATURE_LABEL,
            &dashboard.temperature,
            Color::LightRed,
        ),
        tables[0],
    );
    frame.render_widget(
        summary_table(content::HUMIDITY_LABEL, &dashboard.humidity, Color::LightBlue),
        tables[1],
    );

    render_code(
        frame,
        chunks[2],
        content::STATISTICS_CODE_HEADING,
        content::STATISTICS_CODE,
    );
}

fn render_chart<B: Backend>(frame: &mut Frame<B>, rect: Rect, dashboard: &Dashboard) {
    let temperature = dashboard.temperature_points();
    let humidity = dashboard.humidity_points();
    let datasets = vec![
        Dataset::default()
            .name(content::TEMPERATURE_LABEL)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::LightRed))
            .data(&temperature),
        Dataset::default()
            .name(content::HUMIDITY_LABEL)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::LightBlue))
            .data(&humidity),
    ];

    let last = dashboard.readings.len().saturating_sub(1);
    let x_labels = [0, last / 2, last]
        .iter()
        .filter_map(|&i| dashboard.readings.get(i))
        .map(|reading| Span::raw(reading.hour_label.clone()))
        .collect::<Vec<_>>();
    let [low, high] = dashboard.chart_bounds();
    let y_labels = vec![
        Span::raw(format!("{:.0}", low)),
        Span::raw(format!("{:.0}", (low + high) / 2.)),
        Span::raw(format!("{:.0}", high)),
    ];

    let chart = Chart::new(datasets)
        .block(bordered(content::FORECAST_HEADING))
        .x_axis(
            Axis::default()
                .title("Hora")
                .style(Style::default().fg(Color::Gray))
                .bounds([0., last as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([low, high])
                .labels(y_labels),
        );
    frame.render_widget(chart, rect);
}

fn render_forecast<B: Backend>(frame: &mut Frame<B>, rect: Rect, dashboard: &Dashboard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage(45),
                Constraint::Length(8),
                Constraint::Min(4),
            ]
            .as_ref(),
        )
        .split(rect);

    render_chart(frame, chunks[0], dashboard);

    let methods = content::FORECAST_METHODS
        .iter()
        .flat_map(|method| {
            vec![
                Spans::from(bold(method.name)),
                Spans::from(Span::styled(
                    method.description,
                    Style::default().fg(Color::Gray),
                )),
            ]
        })
        .collect::<Vec<_>>();
    let methods = Paragraph::new(methods).block(bordered(content::FORECAST_METHODS_HEADING));
    frame.render_widget(methods, chunks[1]);

    render_code(
        frame,
        chunks[2],
        content::FORECAST_CODE_HEADING,
        content::FORECAST_CODE,
    );
}

fn render_footer<B: Backend>(frame: &mut Frame<B>, rect: Rect) {
    let message = Paragraph::new(vec![
        Spans::from(Span::styled(
            "←/→ change tab · 1-3 select tab · r new sample · q quit",
            Style::default().fg(Color::LightCyan),
        )),
        Spans::from(Span::styled(
            content::NOTE,
            Style::default().fg(Color::Yellow),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::White))
            .title("Ayuda")
            .border_type(BorderType::Plain),
    );
    frame.render_widget(message, rect);
}
