//! Minimal metrics registry for the server.
//!
//! Counters carry dynamic labels backed by `DashMap`; labels are flattened
//! into sorted key vectors to keep deterministic ordering. Histograms are
//! label-less with fixed seconds-scale buckets; observations are stored as
//! integer microseconds so increments stay atomic, and rendered back as
//! seconds in the exposition output.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dashmap::DashMap;

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Current value for an exact label set (0 if never incremented).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} counter", name);
        for r in self.map.iter() {
            let val = r.value().load(Ordering::Relaxed);
            let label_str = r
                .key()
                .iter()
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
        }
    }
}

// Fixed buckets, stored in microseconds, rendered in seconds.
// 5ms, 10ms, 25ms, 50ms, 100ms, 250ms, 500ms, 1s, 2.5s, 5s, 10s
const BUCKETS_MICROS: [u64; 11] = [
    5_000, 10_000, 25_000, 50_000, 100_000, 250_000, 500_000, 1_000_000, 2_500_000, 5_000_000,
    10_000_000,
];

pub struct Histogram {
    count: AtomicU64,
    sum_micros: AtomicU64,
    buckets: [AtomicU64; 11],
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            count: AtomicU64::new(0),
            sum_micros: AtomicU64::new(0),
            buckets: std::array::from_fn(|_| AtomicU64::new(0)),
        }
    }
}

impl Histogram {
    /// Observe a duration measured by the caller.
    pub fn observe(&self, duration: Duration) {
        self.observe_secs(duration.as_secs_f64());
    }

    /// Observe a value in seconds (e.g. a phase timing from a report).
    pub fn observe_secs(&self, secs: f64) {
        let micros = if secs > 0.0 { (secs * 1e6) as u64 } else { 0 };

        self.count.fetch_add(1, Ordering::Relaxed);
        self.sum_micros.fetch_add(micros, Ordering::Relaxed);

        // Cumulative buckets: increment every bucket the value fits in.
        for (i, &b) in BUCKETS_MICROS.iter().enumerate() {
            if micros <= b {
                self.buckets[i].fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Total number of observations.
    pub fn sample_count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Render in Prometheus text exposition format (`le` in seconds).
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} histogram", name);
        for (i, &le_micros) in BUCKETS_MICROS.iter().enumerate() {
            let count = self.buckets[i].load(Ordering::Relaxed);
            let _ = writeln!(
                out,
                "{}_bucket{{le=\"{}\"}} {}",
                name,
                le_micros as f64 / 1e6,
                count
            );
        }
        let count = self.count.load(Ordering::Relaxed);
        let _ = writeln!(out, "{}_bucket{{le=\"+Inf\"}} {}", name, count);

        let sum = self.sum_micros.load(Ordering::Relaxed);
        let _ = writeln!(out, "{}_sum {}", name, sum as f64 / 1e6);
        let _ = writeln!(out, "{}_count {}", name, count);
    }
}

/// Process-wide metric state. Created once in `AppState`, observed from
/// concurrently-handled requests, never reset.
#[derive(Default)]
pub struct ServiceMetrics {
    /// Wall-clock of every `/` request (middleware, all outcomes).
    pub request_duration: Histogram,
    /// Collaborator load phase (recorded on success only).
    pub image_load: Histogram,
    /// Collaborator processing phase (recorded on success only).
    pub image_processing: Histogram,
    /// Request count by method and status (middleware).
    pub http_requests: CounterVec,
}

impl ServiceMetrics {
    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.request_duration
            .render("image_processing_duration_seconds", &mut out);
        self.image_load.render("image_load_seconds", &mut out);
        self.image_processing
            .render("image_processing_seconds", &mut out);
        self.http_requests.render("http_requests_total", &mut out);
        out
    }
}
