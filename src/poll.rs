//! Refresh loop: fetch, observe, render
//!
//! One tick fetches every watched variable, runs the result through the
//! delta tracker and the history buffers, and hands back rendered rows.
//! Fetches inside a tick are serialized; the fetcher's memoization
//! already guarantees at most one upstream request per variable per
//! tick, and no single request can block longer than its timeout.

use std::collections::HashMap;
use std::time::Duration;

use log::{info, trace};
use tokio::time::Instant;

use rdash_client::{ValueFetcher, ValueTransport};
use rdash_core::{memo_ttl, DeltaTracker, HistoryBuffer, Observation};

use crate::display::{self, MetricRow};

/// The observations produced by one refresh tick, in watch order.
pub type TickResult = Vec<(String, Observation)>;

/// Drives periodic refreshes of a fixed set of watched variables.
pub struct PollLoop<T> {
    fetcher: ValueFetcher<T>,
    tracker: DeltaTracker,
    histories: HashMap<String, HistoryBuffer>,
    watch: Vec<String>,
    history_points: usize,
}

impl<T: ValueTransport> PollLoop<T> {
    pub fn new(
        transport: T,
        watch: Vec<String>,
        poll_interval: Duration,
        history_points: usize,
    ) -> Self {
        Self {
            fetcher: ValueFetcher::new(transport, memo_ttl(poll_interval)),
            tracker: DeltaTracker::new(),
            histories: HashMap::new(),
            watch,
            history_points,
        }
    }

    pub fn watched(&self) -> &[String] {
        &self.watch
    }

    /// Recorded history for one variable, if any numeric values have
    /// been observed for it.
    pub fn history(&self, variable: &str) -> Option<&HistoryBuffer> {
        self.histories.get(variable)
    }

    /// Run one refresh tick over all watched variables.
    pub async fn tick(&mut self) -> TickResult {
        let mut results = Vec::with_capacity(self.watch.len());

        for variable in &self.watch {
            let value = self.fetcher.fetch(variable).await;
            let observation = self.tracker.observe(variable, value);

            if observation.value.is_numeric() {
                self.histories
                    .entry(variable.clone())
                    .or_insert_with(|| HistoryBuffer::new(self.history_points))
                    .push(&observation.value);
            }

            results.push((variable.clone(), observation));
        }

        results
    }

    /// Render one tick's results as an aligned text table.
    pub fn render(&self, results: &TickResult) -> String {
        let rows: Vec<MetricRow> = results
            .iter()
            .map(|(variable, observation)| display::metric_row(variable, observation))
            .collect();
        display::render_table(&rows)
    }

    /// Trend summaries for every watched variable with recorded history.
    pub fn render_history(&self) -> String {
        let mut out = String::new();
        for variable in &self.watch {
            if let Some(history) = self.histories.get(variable) {
                if let Some(summary) = display::history_summary(variable, history) {
                    out.push_str(&summary);
                    out.push('\n');
                }
            }
        }
        out
    }

    /// Run ticks forever at `interval`, printing each result.
    ///
    /// Fetch failures surface as N/A rows; nothing in a tick is fatal.
    pub async fn run(&mut self, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);

        loop {
            ticker.tick().await;

            let start = Instant::now();
            let results = self.tick().await;
            let errors = results.iter().filter(|(_, o)| o.value.is_error()).count();

            println!("{}", self.render(&results));
            if errors > 0 {
                info!("{errors} of {} fetches degraded this tick", results.len());
            }
            trace!("Tick took {:?}", start.elapsed());
        }
    }
}
