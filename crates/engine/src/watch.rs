// crates/engine/src/watch.rs
use crate::cancel::CancelToken;
use crate::config::WatchConfig;
use std::thread;
use std::time::Duration;

/// Run `on_cycle` every `config.interval` until `token` is cancelled.
///
/// Cancellation is checked before each cycle and once per `config.tick`
/// while waiting; a cycle already running is never interrupted. Returns the
/// number of cycles that ran.
pub fn watch_loop<F>(config: &WatchConfig, token: &CancelToken, mut on_cycle: F) -> usize
where
    F: FnMut(),
{
    let mut cycles = 0;
    while !token.is_cancelled() {
        on_cycle();
        cycles += 1;

        if !sleep_unless_cancelled(config.interval, config.tick, token) {
            break;
        }
    }
    log::debug!("watch loop stopped after {cycles} cycles");
    cycles
}

/// Sleep for `total` in steps of at most `tick`.
///
/// Returns `false` as soon as the token is seen cancelled, `true` if the full
/// duration elapsed without cancellation.
pub fn sleep_unless_cancelled(total: Duration, tick: Duration, token: &CancelToken) -> bool {
    let tick = if tick.is_zero() { total } else { tick };
    let mut remaining = total;
    while !remaining.is_zero() {
        if token.is_cancelled() {
            return false;
        }
        let step = remaining.min(tick);
        thread::sleep(step);
        remaining = remaining.saturating_sub(step);
    }
    !token.is_cancelled()
}
