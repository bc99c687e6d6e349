use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub const DEFAULT_MAX_PER_WINDOW: usize = 5;
pub const DEFAULT_WINDOW_SECS: u64 = 900; // 15 minutes

/// Map size past which `record` sweeps expired IPs.
const PRUNE_THRESHOLD: usize = 1024;

/// Sliding-window counter of contact form submissions per client IP.
#[derive(Clone)]
pub struct RateLimiter {
    attempts: Arc<Mutex<HashMap<IpAddr, Vec<Instant>>>>,
    max_per_window: usize,
    window: Duration,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PER_WINDOW, Duration::from_secs(DEFAULT_WINDOW_SECS))
    }
}

impl RateLimiter {
    pub fn new(max_per_window: usize, window: Duration) -> Self {
        Self {
            attempts: Arc::new(Mutex::new(HashMap::new())),
            max_per_window,
            window,
        }
    }

    /// Check if the given IP is rate-limited. Returns true if blocked.
    /// Also lazily cleans up stale entries for the checked IP.
    pub fn is_blocked(&self, ip: IpAddr) -> bool {
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        let now = Instant::now();
        let window = self.window;

        if let Some(timestamps) = map.get_mut(&ip) {
            timestamps.retain(|t| now.duration_since(*t) < window);
            if timestamps.is_empty() {
                map.remove(&ip);
                return false;
            }
            return timestamps.len() >= self.max_per_window;
        }
        false
    }

    /// Record a submission. Once the map is large, IPs with no live
    /// timestamps are dropped so one-off visitors do not accumulate.
    pub fn record(&self, ip: IpAddr) {
        self.record_with_threshold(ip, PRUNE_THRESHOLD);
    }

    fn record_with_threshold(&self, ip: IpAddr, threshold: usize) {
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        let now = Instant::now();
        if map.len() >= threshold {
            let window = self.window;
            map.retain(|_, timestamps| {
                timestamps.retain(|t| now.duration_since(*t) < window);
                !timestamps.is_empty()
            });
        }
        map.entry(ip).or_default().push(now);
    }

    #[cfg(test)]
    fn tracked_ips(&self) -> usize {
        self.attempts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}
