//! Mock weather generation.
//!
//! Every sample is drawn from a fixed five-entry table. The draw goes through
//! a [`SampleSource`] so tests can replace randomness with a fixed sequence.

use crate::models::{DailyWeather, WeatherCondition};
use chrono::{Days, NaiveDate};
use rand::Rng;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// The temperature paired with each condition, in table order
pub const WEATHER_TABLE: [WeatherSample; 5] = [
    WeatherSample::new(25, WeatherCondition::Sunny),
    WeatherSample::new(18, WeatherCondition::Cloudy),
    WeatherSample::new(30, WeatherCondition::Hot),
    WeatherSample::new(15, WeatherCondition::Rainy),
    WeatherSample::new(22, WeatherCondition::Windy),
];

/// Cities advertised by `/cities`
pub const CITIES: [&str; 7] = [
    "London", "New York", "Paris", "Tokyo", "Sydney", "Berlin", "Mumbai",
];

/// Number of days in a history or forecast
pub const DAYS_PER_SERIES: u64 = 7;

/// Preferred temperature used to rank forecast days
pub const IDEAL_TEMPERATURE: i32 = 22;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeatherSample {
    pub temperature: i32,
    pub condition: WeatherCondition,
}

impl WeatherSample {
    pub const fn new(temperature: i32, condition: WeatherCondition) -> Self {
        Self {
            temperature,
            condition,
        }
    }

    /// Tag the sample with a calendar day
    pub fn on(self, date: NaiveDate) -> DailyWeather {
        DailyWeather {
            date: date.format(DATE_FORMAT).to_string(),
            temperature: self.temperature,
            condition: self.condition,
        }
    }
}

/// Source of table indices
pub trait SampleSource: Send + Sync {
    /// Return an index in `0..len`; `len` is never zero
    fn pick(&self, len: usize) -> usize;
}

/// Uniform draws from the thread-local RNG
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngSource;

impl SampleSource for ThreadRngSource {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Replays a fixed cycle of indices, wrapping around at the end
#[derive(Debug)]
pub struct SequenceSource {
    indices: Vec<usize>,
    cursor: AtomicUsize,
}

impl SequenceSource {
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Build a sequence that yields the given conditions in order
    pub fn of_conditions(conditions: &[WeatherCondition]) -> Self {
        let indices = conditions
            .iter()
            .filter_map(|c| WEATHER_TABLE.iter().position(|s| s.condition == *c))
            .collect();
        Self::new(indices)
    }
}

impl SampleSource for SequenceSource {
    fn pick(&self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let i = self.cursor.fetch_add(1, Ordering::Relaxed) % self.indices.len();
        self.indices[i] % len
    }
}

/// Produces mock weather from the fixed table
#[derive(Clone)]
pub struct WeatherGenerator {
    source: Arc<dyn SampleSource>,
}

impl Default for WeatherGenerator {
    fn default() -> Self {
        Self::new(ThreadRngSource)
    }
}

impl WeatherGenerator {
    pub fn new<S: SampleSource + 'static>(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// One sample from the table
    pub fn sample(&self) -> WeatherSample {
        WEATHER_TABLE[self.source.pick(WEATHER_TABLE.len())]
    }

    /// Seven days ending on `today`, oldest first
    pub fn history(&self, today: NaiveDate) -> Vec<DailyWeather> {
        (0..DAYS_PER_SERIES)
            .rev()
            .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
            .map(|date| self.sample().on(date))
            .collect()
    }

    /// Seven days starting on `today`
    pub fn forecast(&self, today: NaiveDate) -> Vec<DailyWeather> {
        (0..DAYS_PER_SERIES)
            .filter_map(|offset| today.checked_add_days(Days::new(offset)))
            .map(|date| self.sample().on(date))
            .collect()
    }
}

/// Pick the best day: sunny first, then closest to the ideal temperature.
///
/// Ties keep the earliest day.
pub fn recommend(days: &[DailyWeather]) -> Option<&DailyWeather> {
    days.iter().min_by_key(|day| {
        (
            day.condition != WeatherCondition::Sunny,
            (day.temperature - IDEAL_TEMPERATURE).abs(),
        )
    })
}
