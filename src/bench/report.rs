//! Load run summary.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Outcome of a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub latency: Duration,
    /// `None` when the request failed before a status arrived.
    pub status: Option<u16>,
}

/// Aggregated results of a load run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    pub requests: usize,
    pub succeeded: usize,
    pub failed: usize,
    #[serde(serialize_with = "as_millis")]
    pub elapsed: Duration,
    #[serde(serialize_with = "as_millis")]
    pub min: Duration,
    #[serde(serialize_with = "as_millis")]
    pub p50: Duration,
    #[serde(serialize_with = "as_millis")]
    pub p90: Duration,
    #[serde(serialize_with = "as_millis")]
    pub p99: Duration,
    #[serde(serialize_with = "as_millis")]
    pub max: Duration,
    /// Count of responses per status code.
    pub statuses: BTreeMap<u16, usize>,
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_micros() as f64 / 1000.0)
}

impl LoadReport {
    /// Summarize samples collected over `elapsed` wall-clock time.
    ///
    /// A sample counts as succeeded when it carries a 2xx status.
    pub fn from_samples(samples: &[Sample], elapsed: Duration) -> Self {
        let mut latencies: Vec<Duration> = samples.iter().map(|s| s.latency).collect();
        latencies.sort_unstable();

        let mut statuses = BTreeMap::new();
        let mut succeeded = 0;
        for status in samples.iter().filter_map(|s| s.status) {
            *statuses.entry(status).or_insert(0) += 1;
            if (200..300).contains(&status) {
                succeeded += 1;
            }
        }

        Self {
            requests: samples.len(),
            succeeded,
            failed: samples.len() - succeeded,
            elapsed,
            min: latencies.first().copied().unwrap_or_default(),
            p50: percentile(&latencies, 50.0),
            p90: percentile(&latencies, 90.0),
            p99: percentile(&latencies, 99.0),
            max: latencies.last().copied().unwrap_or_default(),
            statuses,
        }
    }

    /// Completed requests per second of wall-clock time.
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.requests as f64 / secs
        }
    }
}

/// Nearest-rank percentile over sorted values.
fn percentile(sorted: &[Duration], p: f64) -> Duration {
    if sorted.is_empty() {
        return Duration::ZERO;
    }
    let rank = (p * sorted.len() as f64 / 100.0).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "requests:   {}", self.requests)?;
        writeln!(f, "succeeded:  {}", self.succeeded)?;
        writeln!(f, "failed:     {}", self.failed)?;
        writeln!(f, "elapsed:    {:?}", self.elapsed)?;
        writeln!(f, "throughput: {:.1} req/s", self.throughput())?;
        writeln!(
            f,
            "latency:    min {:?} / p50 {:?} / p90 {:?} / p99 {:?} / max {:?}",
            self.min, self.p50, self.p90, self.p99, self.max
        )?;
        for (status, count) in &self.statuses {
            writeln!(f, "status {}: {}", status, count)?;
        }
        Ok(())
    }
}
