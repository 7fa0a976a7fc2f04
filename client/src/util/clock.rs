//! Monotonic millisecond clock shared by timer-driven UI state.

/// Milliseconds since page load from `performance.now()`; `0` outside the
/// browser. Never steps back when the system clock is adjusted.
#[must_use]
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        let now = web_sys::window()
            .and_then(|w| w.performance())
            .map_or(0.0, |p| p.now());
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ms = now.max(0.0) as u64;
        ms
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
