//! Timing helpers for the "This took N seconds." report lines.

use std::time::{Duration, Instant};

/// Run `f` and return its result together with the elapsed wall time.
pub fn timed<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let started = Instant::now();
    let value = f();
    (value, started.elapsed())
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.6} seconds", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_returns_the_closure_value() {
        let (v, elapsed) = timed(|| 40 + 2);
        assert_eq!(v, 42);
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn elapsed_has_fixed_precision() {
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.500000 seconds");
    }
}
