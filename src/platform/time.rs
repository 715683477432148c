//! Wall-clock milliseconds

use crate::consts::SAVE_INTERVAL_MS;

/// Milliseconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

/// Timer delay for `setInterval`. Non-finite periods fall back to the
/// default autosave period; the rest are rounded and clamped to `1..=i32::MAX`.
pub fn interval_timeout(interval_ms: f64) -> i32 {
    if !interval_ms.is_finite() {
        log::warn!(
            "Autosave interval {} is not a number, using {}ms",
            interval_ms,
            SAVE_INTERVAL_MS
        );
        return SAVE_INTERVAL_MS as i32;
    }
    let rounded = interval_ms.round();
    let clamped = rounded.clamp(1.0, i32::MAX as f64);
    if clamped != rounded {
        log::warn!("Autosave interval {}ms out of range, using {}ms", interval_ms, clamped);
    }
    clamped as i32
}
