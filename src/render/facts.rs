//! Per-invocation dynamic facts.
//!
//! Time and randomness sit behind [`Clock`] and [`Chooser`] so rendering can
//! be tested with fixed values.

use chrono::{Local, NaiveDateTime};
use rand::Rng;

/// Inclusive bounds of the random number shown on the page.
pub const NUMBER_MIN: u32 = 1;
pub const NUMBER_MAX: u32 = 100;

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Source of uniform random choices.
pub trait Chooser {
    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform integer in `low..=high`.
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32;
}

/// Process-local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Chooser backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngChooser;

impl Chooser for ThreadRngChooser {
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }

    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Chooser that always returns the same answers.
#[derive(Debug, Clone, Copy)]
pub struct FixedChooser {
    pub index: usize,
    pub number: u32,
}

impl Chooser for FixedChooser {
    fn index(&mut self, _len: usize) -> usize {
        self.index
    }

    fn int_inclusive(&mut self, _low: u32, _high: u32) -> u32 {
        self.number
    }
}

/// Colors the page can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Blue,
    Green,
    Orange,
    Purple,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Orange,
        Color::Purple,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Orange => "orange",
            Color::Purple => "purple",
        }
    }
}

/// Values generated fresh for each invocation. Never derived from the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicFacts {
    pub timestamp: NaiveDateTime,
    pub color: Color,
    pub number: u32,
}

impl DynamicFacts {
    /// Sample the clock and the chooser once.
    ///
    /// Out-of-range answers from a chooser are folded back into range so the
    /// color set and number bounds always hold.
    pub fn generate(clock: &impl Clock, chooser: &mut impl Chooser) -> Self {
        let index = chooser.index(Color::ALL.len()) % Color::ALL.len();
        let number = chooser
            .int_inclusive(NUMBER_MIN, NUMBER_MAX)
            .clamp(NUMBER_MIN, NUMBER_MAX);

        Self {
            timestamp: clock.now(),
            color: Color::ALL[index],
            number,
        }
    }

    /// Full weekday name, e.g. "Tuesday".
    pub fn weekday(&self) -> String {
        self.timestamp.format("%A").to_string()
    }

    /// Date and time, e.g. "2024-01-02 15:04:05".
    pub fn time(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
