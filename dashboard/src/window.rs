use simulator::{Channel, Reading};
use std::collections::VecDeque;

/// Number of sample points kept in the rolling window
pub const WINDOW_CAPACITY: usize = 15;

/// A reading tagged with the wall-clock label of the tick that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePoint {
    pub label: String,
    pub reading: Reading,
}

/// Fixed-capacity FIFO of the most recent sample points.
///
/// Points are stored whole, so the time axis and every channel sequence are
/// always the same length and index-aligned.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    points: VecDeque<SamplePoint>,
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl RollingWindow {
    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(WINDOW_CAPACITY),
        }
    }

    /// Appends a point, evicting the oldest one once the window is full
    pub fn record(&mut self, label: impl Into<String>, reading: Reading) {
        if self.points.len() == WINDOW_CAPACITY {
            self.points.pop_front();
        }
        self.points.push_back(SamplePoint {
            label: label.into(),
            reading,
        });
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        WINDOW_CAPACITY
    }

    pub fn latest(&self) -> Option<&SamplePoint> {
        self.points.back()
    }

    /// Time axis, oldest first
    pub fn time_labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    /// Values of one channel, oldest first
    pub fn series(&self, channel: Channel) -> Vec<f64> {
        self.points.iter().map(|p| p.reading.get(channel)).collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Distinct, recognisable reading for tick `n`
    pub(crate) fn reading_for(n: usize) -> Reading {
        let n = n as f64;
        Reading {
            temperature: 20.0 + n / 10.0,
            humidity: 40.0 + n,
            co2: 400.0 + n,
            hydrogen: n / 100.0,
        }
    }

    fn fill(ticks: usize) -> RollingWindow {
        let mut window = RollingWindow::new();
        for n in 1..=ticks {
            window.record(format!("t{}", n), reading_for(n));
        }
        window
    }

    fn assert_aligned(window: &RollingWindow, expected: usize) {
        assert_eq!(window.len(), expected);
        assert_eq!(window.time_labels().len(), expected);
        for channel in Channel::ALL {
            assert_eq!(window.series(channel).len(), expected);
        }
    }

    #[test]
    fn test_empty_window() {
        let window = RollingWindow::new();

        assert!(window.is_empty());
        assert!(window.latest().is_none());
        assert_aligned(&window, 0);
        assert_eq!(window.capacity(), WINDOW_CAPACITY);
    }

    #[test]
    fn test_length_is_min_of_ticks_and_capacity() {
        let mut window = RollingWindow::new();

        for n in 1..=40 {
            window.record(format!("t{}", n), reading_for(n));
            assert_aligned(&window, n.min(WINDOW_CAPACITY));
        }
    }

    #[test]
    fn test_fifo_eviction_after_sixteen_ticks() {
        let window = fill(16);

        let labels = window.time_labels();
        assert!(!labels.contains(&"t1".to_string()));
        assert_eq!(labels[0], "t2");

        for channel in Channel::ALL {
            let series = window.series(channel);
            assert!(!series.contains(&reading_for(1).get(channel)));
            assert_eq!(series[0], reading_for(2).get(channel));
        }
    }

    #[test]
    fn test_twenty_ticks_drops_oldest_five() {
        let window = fill(20);

        assert_aligned(&window, WINDOW_CAPACITY);
        let labels = window.time_labels();
        for n in 1..=5 {
            assert!(!labels.contains(&format!("t{}", n)));
            assert!(!window.series(Channel::Co2).contains(&reading_for(n).co2));
        }
        assert_eq!(labels.first().map(String::as_str), Some("t6"));
        assert_eq!(labels.last().map(String::as_str), Some("t20"));
    }

    #[test]
    fn test_latest_is_newest_point() {
        let window = fill(3);

        let latest = window.latest().unwrap();
        assert_eq!(latest.label, "t3");
        assert_eq!(latest.reading, reading_for(3));
    }

    #[test]
    fn test_series_keeps_time_alignment() {
        let window = fill(18);

        let labels = window.time_labels();
        let humidity = window.series(Channel::Humidity);
        for (label, value) in labels.iter().zip(humidity) {
            let n: usize = label.trim_start_matches('t').parse().unwrap();
            assert_eq!(value, reading_for(n).humidity);
        }
    }
}
