// crates/engine/src/signal.rs
//! Bridge from process signals to a [`CancelToken`].
//!
//! SIGINT and SIGTERM are blocked on the calling thread and taken
//! synchronously with `sigwait` on a dedicated thread, which cancels the
//! token. No async-signal handler runs and no process-wide flag is touched.
//!
//! Call [`install_interrupt_bridge`] from the main thread before any other
//! thread is spawned, so every thread inherits the blocked mask.

use crate::cancel::CancelToken;
use std::io;
use std::thread;

/// Signals that stop the watch loop.
pub const STOP_SIGNALS: [libc::c_int; 2] = [libc::SIGINT, libc::SIGTERM];

/// Block [`STOP_SIGNALS`] and start the thread that turns them into
/// `token.cancel()`.
///
/// # Errors
///
/// Returns an error if the signal mask cannot be changed or the bridge
/// thread cannot be spawned.
pub fn install_interrupt_bridge(token: CancelToken) -> io::Result<()> {
    let set = stop_signal_set();

    // SAFETY: `set` is an initialized sigset_t; the old mask is not requested.
    let rc = unsafe { libc::pthread_sigmask(libc::SIG_BLOCK, &set, std::ptr::null_mut()) };
    if rc != 0 {
        return Err(io::Error::from_raw_os_error(rc));
    }

    thread::Builder::new()
        .name("dirwatch-signals".into())
        .spawn(move || wait_for_signals(&set, &token))?;
    Ok(())
}

fn stop_signal_set() -> libc::sigset_t {
    // SAFETY: sigemptyset fully initializes the set before sigaddset reads it.
    unsafe {
        let mut set: libc::sigset_t = std::mem::zeroed();
        libc::sigemptyset(&mut set);
        for sig in STOP_SIGNALS {
            libc::sigaddset(&mut set, sig);
        }
        set
    }
}

fn wait_for_signals(set: &libc::sigset_t, token: &CancelToken) {
    loop {
        let mut sig: libc::c_int = 0;
        // SAFETY: both pointers are valid for the duration of the call.
        let rc = unsafe { libc::sigwait(set, &mut sig) };
        if rc == 0 {
            log::debug!("received signal {sig}, stopping");
            token.cancel();
        } else {
            log::warn!("sigwait failed: {}", io::Error::from_raw_os_error(rc));
            return;
        }
    }
}
