//! Bounded sample history for time-series views
//!
//! Each watched numeric variable keeps the last N readings so the
//! dashboard can show a short trend without any persistence layer.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use rdash_types::TypedValue;

use crate::constants::DEFAULT_HISTORY_POINTS;

/// One timestamped numeric reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub at: DateTime<Local>,
    pub value: f64,
}

/// Ring of the most recent numeric samples for one variable.
///
/// Non-numeric values (booleans, text, errors) are ignored on push, so a
/// transient upstream failure leaves the trend intact rather than
/// punching a hole in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryBuffer {
    capacity: usize,
    samples: VecDeque<Sample>,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            samples: VecDeque::with_capacity(capacity.max(1)),
        }
    }

    /// Push a freshly observed value, timestamped now. Returns whether
    /// the value was numeric and therefore recorded.
    pub fn push(&mut self, value: &TypedValue) -> bool {
        match value.as_f64() {
            Some(n) => {
                self.push_sample(Sample {
                    at: Local::now(),
                    value: n,
                });
                true
            }
            None => false,
        }
    }

    /// Push a sample with an explicit timestamp.
    pub fn push_sample(&mut self, sample: Sample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Smallest recorded value, if any samples exist.
    pub fn min(&self) -> Option<f64> {
        self.samples.iter().map(|s| s.value).reduce(f64::min)
    }

    /// Largest recorded value, if any samples exist.
    pub fn max(&self) -> Option<f64> {
        self.samples.iter().map(|s| s.value).reduce(f64::max)
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdash_types::FetchError;

    #[test]
    fn test_push_numeric_records() {
        let mut history = HistoryBuffer::new(5);
        assert!(history.push(&TypedValue::Numeric(300.0)));
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().value, 300.0);
    }

    #[test]
    fn test_push_non_numeric_ignored() {
        let mut history = HistoryBuffer::new(5);
        assert!(!history.push(&TypedValue::Boolean(true)));
        assert!(!history.push(&TypedValue::Text("RUNNING".into())));
        assert!(!history.push(&TypedValue::Error(FetchError::timeout())));
        assert!(history.is_empty());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = HistoryBuffer::new(3);
        for i in 0..5 {
            history.push(&TypedValue::Numeric(i as f64));
        }
        assert_eq!(history.len(), 3);
        let values: Vec<_> = history.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_min_max() {
        let mut history = HistoryBuffer::new(10);
        for v in [280.0, 310.5, 295.2] {
            history.push(&TypedValue::Numeric(v));
        }
        assert_eq!(history.min(), Some(280.0));
        assert_eq!(history.max(), Some(310.5));
    }

    #[test]
    fn test_default_capacity() {
        let history = HistoryBuffer::default();
        assert_eq!(history.capacity(), DEFAULT_HISTORY_POINTS);
    }
}
