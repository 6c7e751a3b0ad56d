use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tracing::{Instrument, info_span};

/// Counters of the Riot API requests issued since startup.
///
/// Failures are requests that did not end with a decoded 200 payload,
/// including the 404/422 answers the endpoints translate into lookup misses.
#[derive(Debug)]
pub struct RequestMetrics {
    start: Instant,
    requests: AtomicU64,
    failures: AtomicU64,
}

impl RequestMetrics {
    const REPORT_EVERY: Duration = Duration::from_secs(60);

    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            start: Instant::now(),
            requests: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        })
    }

    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    /// One line summary of the counters over `elapsed`.
    fn report(&self, elapsed: Duration) -> String {
        let requests = self.requests();
        let minutes = elapsed.as_secs_f64() / 60.0;
        let per_minute = if minutes > 0.0 {
            requests as f64 / minutes
        } else {
            0.0
        };

        format!(
            "{} riot requests, {} failed (avg {:.2} req/min)",
            requests,
            self.failures(),
            per_minute
        )
    }

    pub async fn log_loop(self: Arc<Self>) {
        let mut interval = tokio::time::interval(Self::REPORT_EVERY);
        interval.tick().await;

        loop {
            interval.tick().await;
            let line = self.report(self.start.elapsed());
            async { tracing::info!("{}", line) }
                .instrument(info_span!("📊 ", client = "riot"))
                .await
        }
    }
}
