/// Milliseconds on a monotonic-enough clock that also works in the browser,
/// where `std::time::Instant` is unavailable.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use once_cell::sync::Lazy;
    use std::time::Instant;

    static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);
    EPOCH.elapsed().as_secs_f64() * 1000.0
}

#[inline]
pub fn log_perf(scope: &str, started_at_ms: f64, details: &str) {
    let elapsed_ms = (now_ms() - started_at_ms).max(0.0).round() as u64;
    if details.trim().is_empty() {
        tracing::debug!(target: "perf", "{scope} took {elapsed_ms}ms");
    } else {
        tracing::debug!(target: "perf", "{scope} took {elapsed_ms}ms | {details}");
    }
}
