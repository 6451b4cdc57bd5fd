use std::time::Duration;

/// Frame-path timings shown on the debug status row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameStats {
    pub frame_ms: f64,
    pub layout_ms: f64,
    pub frame_samples: u64,
    pub layout_samples: u64,
    pub layout_cache_hits: u64,
    pub layout_cache_misses: u64,
}

impl FrameStats {
    pub fn record_frame(&mut self, elapsed: Duration) {
        self.frame_ms = elapsed.as_secs_f64() * 1000.0;
        self.frame_samples += 1;
    }

    pub fn record_layout(&mut self, elapsed: Duration) {
        self.layout_ms = elapsed.as_secs_f64() * 1000.0;
        self.layout_samples += 1;
    }

    pub fn record_layout_cache_hit(&mut self) {
        self.layout_cache_hits += 1;
    }

    pub fn record_layout_cache_miss(&mut self) {
        self.layout_cache_misses += 1;
    }

    pub fn layout_cache_hit_rate(&self) -> f64 {
        let total = self.layout_cache_hits + self.layout_cache_misses;
        if total == 0 {
            return 0.0;
        }
        self.layout_cache_hits as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::FrameStats;

    #[test]
    fn records_milliseconds_and_sample_counts() {
        let mut stats = FrameStats::default();
        stats.record_frame(Duration::from_millis(12));
        stats.record_layout(Duration::from_millis(3));

        assert_eq!(stats.frame_ms, 12.0);
        assert_eq!(stats.layout_ms, 3.0);
        assert_eq!(stats.frame_samples, 1);
        assert_eq!(stats.layout_samples, 1);
    }

    #[test]
    fn hit_rate_counts_hits_against_total_lookups() {
        let mut stats = FrameStats::default();
        assert_eq!(stats.layout_cache_hit_rate(), 0.0);

        stats.record_layout_cache_miss();
        stats.record_layout_cache_hit();
        stats.record_layout_cache_hit();
        stats.record_layout_cache_hit();

        assert_eq!(stats.layout_cache_hit_rate(), 0.75);
    }
}
