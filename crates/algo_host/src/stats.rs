//! Latency statistics for batch runs.
//!
//! Collects per-case solve times and reports min, max, average and a coarse
//! histogram. The runner gathers partial statistics on each rayon worker and
//! merges them with [`LatencyStats::merge`].

const BUCKETS: usize = 20;
const BUCKET_WIDTH_NS: u64 = 1_000;

/// Tracks latency statistics with minimal overhead.
///
/// Buckets are 1 microsecond wide; the last bucket collects everything
/// slower.
#[derive(Debug, Clone)]
pub struct LatencyStats {
    pub min: u64,
    pub max: u64,
    pub sum: u64,
    pub count: u64,
    pub buckets: [u64; BUCKETS],
}

impl Default for LatencyStats {
    fn default() -> Self {
        Self::new()
    }
}

impl LatencyStats {
    /// Creates an empty tracker. `min` starts at `u64::MAX` so the first
    /// measurement becomes the minimum.
    pub fn new() -> Self {
        Self {
            min: u64::MAX,
            max: 0,
            sum: 0,
            count: 0,
            buckets: [0; BUCKETS],
        }
    }

    /// Records a latency measurement in nanoseconds.
    pub fn update(&mut self, nanos: u64) {
        self.min = self.min.min(nanos);
        self.max = self.max.max(nanos);
        self.sum += nanos;
        self.count += 1;

        let idx = (nanos / BUCKET_WIDTH_NS).min(BUCKETS as u64 - 1) as usize;
        self.buckets[idx] += 1;
    }

    /// Folds another tracker's measurements into this one.
    ///
    /// # Arguments
    ///
    /// * `other` - Partial statistics, typically from another worker
    ///
    /// # Returns
    ///
    /// The combined tracker. Merging an empty tracker is a no-op.
    pub fn merge(mut self, other: &LatencyStats) -> Self {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum += other.sum;
        self.count += other.count;
        for (mine, theirs) in self.buckets.iter_mut().zip(other.buckets.iter()) {
            *mine += theirs;
        }
        self
    }

    /// Average latency in nanoseconds, or 0.0 before any measurement.
    pub fn avg(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }

    /// Prints count, min/avg/max and the non-empty histogram buckets.
    pub fn print_report(&self) {
        println!("\nLatency (solve time per case)");
        println!("Count: {}", self.count);
        if self.count == 0 {
            return;
        }

        let avg_ns = self.avg();
        if avg_ns < 1000.0 {
            println!("Min:   {:.2} ns", self.min as f64);
            println!("Avg:   {:.2} ns", avg_ns);
            println!("Max:   {:.2} ns", self.max as f64);
        } else {
            println!("Min:   {:.2} us", self.min as f64 / 1000.0);
            println!("Avg:   {:.2} us", avg_ns / 1000.0);
            println!("Max:   {:.2} us", self.max as f64 / 1000.0);
        }

        println!("Distribution (1us buckets):");
        for (i, &count) in self.buckets.iter().enumerate() {
            if count > 0 {
                let range_end = if i == BUCKETS - 1 { ">" } else { "" };
                println!("[{:3}-{:3}{} us]: {}", i, i + 1, range_end, count);
            }
        }
    }
}
