//! Per-variable delta tracking
//!
//! Remembers the last successfully fetched value of every variable so a
//! refresh tick can show how much a reading moved since the previous
//! tick. The store is owned by whoever composes the application (no
//! globals), which keeps tests isolated with a fresh tracker each.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

use rdash_types::TypedValue;

/// One observed value plus the change since the previous observation.
///
/// `delta` is present only when both the current and previous values are
/// numeric and differ. An exact-zero delta is reported as `None`: the
/// dashboard has always rendered "no delta shown" as "unchanged", and
/// callers rely on that reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub value: TypedValue,
    pub delta: Option<f64>,
}

/// Last known good value for a variable, stamped with its fetch time so
/// late-arriving responses cannot roll the store backwards.
struct StoredValue {
    value: TypedValue,
    fetched_at: Instant,
}

/// Session-scoped store of previous values, keyed by variable name.
///
/// Errors are never recorded: a transient network blip must not create a
/// delta discontinuity, so the next good numeric observation diffs
/// against the last good one. Entries live for the tracker's lifetime;
/// there is no eviction.
#[derive(Default)]
pub struct DeltaTracker {
    entries: Mutex<HashMap<String, StoredValue>>,
}

impl DeltaTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly fetched value and compute its delta, stamping the
    /// observation with the current time.
    pub fn observe(&self, variable: &str, fresh: TypedValue) -> Observation {
        self.observe_at(variable, fresh, Instant::now())
    }

    /// Record a value fetched at `fetched_at`.
    ///
    /// Observations must be applied in fetch order for "previous" to
    /// mean "chronologically prior"; if callers overlap fetches, an
    /// observation older than the stored one is reported but not
    /// recorded (last fetch wins by timestamp, not completion order).
    pub fn observe_at(&self, variable: &str, fresh: TypedValue, fetched_at: Instant) -> Observation {
        // Error observations never touch stored history.
        if fresh.is_error() {
            return Observation {
                value: fresh,
                delta: None,
            };
        }

        let mut entries = self.entries.lock().unwrap_or_else(|poisoned| {
            log::warn!("Delta tracker mutex was poisoned, recovering");
            poisoned.into_inner()
        });

        if let Some(prior) = entries.get(variable) {
            if prior.fetched_at > fetched_at {
                log::trace!("Stale observation for {variable} ignored (older than stored value)");
                return Observation {
                    value: fresh,
                    delta: None,
                };
            }
        }

        let delta = match (&fresh, entries.get(variable).map(|s| &s.value)) {
            (TypedValue::Numeric(current), Some(TypedValue::Numeric(previous))) => {
                let d = current - previous;
                if d == 0.0 {
                    None
                } else {
                    Some(d)
                }
            }
            _ => None,
        };

        if fresh.is_trackable() {
            entries.insert(
                variable.to_string(),
                StoredValue {
                    value: fresh.clone(),
                    fetched_at,
                },
            );
        }

        Observation {
            value: fresh,
            delta,
        }
    }

    /// The value the tracker would diff the next observation against.
    pub fn previous(&self, variable: &str) -> Option<TypedValue> {
        let entries = self.entries.lock().unwrap_or_else(|poisoned| {
            log::warn!("Delta tracker mutex was poisoned, recovering");
            poisoned.into_inner()
        });
        entries.get(variable).map(|s| s.value.clone())
    }

    /// Number of variables with a remembered value.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdash_types::FetchError;
    use std::time::Duration;

    #[test]
    fn test_first_observation_has_no_delta() {
        let tracker = DeltaTracker::new();
        let obs = tracker.observe("CORE_TEMP", TypedValue::Numeric(10.0));
        assert_eq!(obs.value, TypedValue::Numeric(10.0));
        assert_eq!(obs.delta, None);
    }

    #[test]
    fn test_numeric_delta() {
        let tracker = DeltaTracker::new();
        tracker.observe("CORE_TEMP", TypedValue::Numeric(10.0));
        let obs = tracker.observe("CORE_TEMP", TypedValue::Numeric(12.5));
        assert_eq!(obs.delta, Some(2.5));
    }

    #[test]
    fn test_zero_delta_suppressed() {
        let tracker = DeltaTracker::new();
        tracker.observe("CORE_TEMP", TypedValue::Numeric(10.0));
        let obs = tracker.observe("CORE_TEMP", TypedValue::Numeric(10.0));
        assert_eq!(obs.delta, None);
    }

    #[test]
    fn test_error_retains_previous_value() {
        let tracker = DeltaTracker::new();
        tracker.observe("CORE_TEMP", TypedValue::Numeric(10.0));

        let obs = tracker.observe("CORE_TEMP", TypedValue::Error(FetchError::timeout()));
        assert!(obs.value.is_error());
        assert_eq!(obs.delta, None);
        assert_eq!(tracker.previous("CORE_TEMP"), Some(TypedValue::Numeric(10.0)));

        // Next good value diffs against 10.0, not against the error
        let obs = tracker.observe("CORE_TEMP", TypedValue::Numeric(11.0));
        assert_eq!(obs.delta, Some(1.0));
    }

    #[test]
    fn test_three_tick_scenario() {
        let tracker = DeltaTracker::new();
        let deltas: Vec<_> = [25.00, 25.00, 26.10]
            .iter()
            .map(|v| tracker.observe("CORE_TEMP", TypedValue::Numeric(*v)).delta)
            .collect();
        assert_eq!(deltas[0], None);
        assert_eq!(deltas[1], None);
        let third = deltas[2].expect("third tick changed");
        assert!((third - 1.10).abs() < 1e-9);
    }

    #[test]
    fn test_boolean_has_no_delta_but_is_stored() {
        let tracker = DeltaTracker::new();
        let obs = tracker.observe("RODS_ALIGNED", TypedValue::Boolean(true));
        assert_eq!(obs.delta, None);
        assert_eq!(
            tracker.previous("RODS_ALIGNED"),
            Some(TypedValue::Boolean(true))
        );

        // A numeric following a boolean has no numeric prior, so no delta
        let obs = tracker.observe("RODS_ALIGNED", TypedValue::Numeric(1.0));
        assert_eq!(obs.delta, None);
    }

    #[test]
    fn test_text_is_not_stored() {
        let tracker = DeltaTracker::new();
        let obs = tracker.observe("CORE_STATE", TypedValue::Text("RUNNING".into()));
        assert_eq!(obs.delta, None);
        assert_eq!(tracker.previous("CORE_STATE"), None);
    }

    #[test]
    fn test_error_before_any_value_stores_nothing() {
        let tracker = DeltaTracker::new();
        let obs = tracker.observe(
            "CORE_TEMP",
            TypedValue::Error(FetchError::connection_refused()),
        );
        assert!(obs.value.is_error());
        assert_eq!(obs.delta, None);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_stale_observation_does_not_overwrite() {
        let tracker = DeltaTracker::new();
        let earlier = Instant::now();
        let later = earlier + Duration::from_millis(500);

        tracker.observe_at("CORE_TEMP", TypedValue::Numeric(20.0), later);
        // An in-flight response from an older fetch completes afterwards
        let obs = tracker.observe_at("CORE_TEMP", TypedValue::Numeric(15.0), earlier);
        assert_eq!(obs.delta, None);
        assert_eq!(tracker.previous("CORE_TEMP"), Some(TypedValue::Numeric(20.0)));
    }
}
