use std::time::Duration;

/// Number of bars shown by the visualizer.
pub const WIDTH: usize = 30;
/// Rows used by the tallest bar.
pub const HEIGHT: i32 = 30;
pub const MIN_VALUE: i32 = 1;
pub const MAX_VALUE: i32 = 100;
/// Upper bound for random arrays in the comparison CLI.
pub const CLI_MAX_VALUE: i32 = 1000;
pub const TICK_MS: u64 = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub count: usize,
    pub min_value: i32,
    pub max_value: i32,
    pub height: i32,
    pub tick: Duration,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            count: WIDTH,
            min_value: MIN_VALUE,
            max_value: MAX_VALUE,
            height: HEIGHT,
            tick: Duration::from_millis(TICK_MS),
            seed: None,
        }
    }
}

impl Settings {
    /// Swaps the bounds if they were given the wrong way round.
    pub fn normalized(mut self) -> Self {
        if self.min_value > self.max_value {
            std::mem::swap(&mut self.min_value, &mut self.max_value);
        }
        self
    }
}
