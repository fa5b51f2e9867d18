use anyhow::Result;
use crossterm::event::KeyCode;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::sample::{generate_samples, humidities, temperatures, Reading};
use crate::stats::SummaryStatistics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Intro,
    Statistics,
    Forecast,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Intro, Tab::Statistics, Tab::Forecast];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Intro => "Introducción",
            Tab::Statistics => "Estadísticas",
            Tab::Forecast => "Pronóstico",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Intro => 0,
            Tab::Statistics => 1,
            Tab::Forecast => 2,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// Everything the dashboard shows: the active tab, the current sample and
/// the summaries derived from it.
#[derive(Debug)]
pub struct Dashboard {
    pub tab: Tab,
    pub readings: Vec<Reading>,
    pub temperature: SummaryStatistics,
    pub humidity: SummaryStatistics,
    count: usize,
    rng: StdRng,
}

impl Dashboard {
    pub fn new(count: usize, mut rng: StdRng) -> Result<Dashboard> {
        let (readings, temperature, humidity) = Dashboard::sample(count, &mut rng)?;
        Ok(Dashboard {
            tab: Tab::Intro,
            readings,
            temperature,
            humidity,
            count,
            rng,
        })
    }

    fn sample(
        count: usize,
        rng: &mut StdRng,
    ) -> Result<(Vec<Reading>, SummaryStatistics, SummaryStatistics)> {
        let readings = generate_samples(count, rng);
        let temperature = SummaryStatistics::compute(&temperatures(&readings))?;
        let humidity = SummaryStatistics::compute(&humidities(&readings))?;
        Ok((readings, temperature, humidity))
    }

    /// Replaces the current sample with a fresh draw.
    pub fn regenerate(&mut self) -> Result<()> {
        let (readings, temperature, humidity) = Dashboard::sample(self.count, &mut self.rng)?;
        self.readings = readings;
        self.temperature = temperature;
        self.humidity = humidity;
        info!(count = self.count, "regenerated sample");
        Ok(())
    }

    pub fn select(&mut self, tab: Tab) {
        debug!(?tab, "selected tab");
        self.tab = tab;
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Result<Action> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(Action::Quit),
            KeyCode::Tab | KeyCode::Right => self.select(self.tab.next()),
            KeyCode::BackTab | KeyCode::Left => self.select(self.tab.previous()),
            KeyCode::Char('1') => self.select(Tab::Intro),
            KeyCode::Char('2') => self.select(Tab::Statistics),
            KeyCode::Char('3') => self.select(Tab::Forecast),
            KeyCode::Char('r') => self.regenerate()?,
            _ => {}
        }
        Ok(Action::Continue)
    }

    pub fn temperature_points(&self) -> Vec<(f64, f64)> {
        self.readings
            .iter()
            .enumerate()
            .map(|(i, reading)| (i as f64, reading.temperature))
            .collect()
    }

    pub fn humidity_points(&self) -> Vec<(f64, f64)> {
        self.readings
            .iter()
            .enumerate()
            .map(|(i, reading)| (i as f64, reading.humidity))
            .collect()
    }

    /// Y-axis bounds covering both series, widened to whole multiples of five.
    pub fn chart_bounds(&self) -> [f64; 2] {
        let (low, high) = self
            .readings
            .iter()
            .flat_map(|reading| [reading.temperature, reading.humidity])
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), value| {
                (low.min(value), high.max(value))
            });
        if low > high {
            return [0., 5.];
        }
        [(low / 5.).floor() * 5., (high / 5.).ceil() * 5.]
    }
}
