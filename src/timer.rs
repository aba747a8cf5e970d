//! The session timer.
//!
//! A [`Ticker`] is a cancellable periodic task running on its own thread.
//! It emits one unit message per period on a channel; the owning session
//! drains that channel from the UI thread, so all game state stays
//! single-threaded.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Handle to a live periodic ticker.
///
/// Exactly one ticker may be live per session; starting a new one replaces
/// and cancels the old. Dropping the handle stops the thread.
pub struct Ticker {
    handle: Option<JoinHandle<()>>,
    tx_ctl: Sender<()>,
    rx_tick: Receiver<()>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        let (tx_ctl, rx_ctl) = mpsc::channel();
        let (tx_tick, rx_tick) = mpsc::channel();

        // The worker waits on the control channel with a timeout instead of
        // sleeping, so a stop request interrupts it mid-period.
        let handle = thread::spawn(move || loop {
            match rx_ctl.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => {
                    if tx_tick.send(()).is_err() {
                        break;
                    }
                }
                // Stop request, or the handle side went away.
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        Self {
            handle: Some(handle),
            tx_ctl,
            rx_tick,
        }
    }

    /// Non-blocking poll: true if a tick was pending.
    pub fn try_recv(&self) -> bool {
        self.rx_tick.try_recv().is_ok()
    }

    /// Explicitly stop the ticker thread.
    pub fn stop(&self) {
        self.tx_ctl.send(()).ok();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.tx_ctl.send(()).ok();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
