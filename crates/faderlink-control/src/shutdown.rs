//! Cooperative shutdown signalling for the bridge loop
//!
//! A [`ShutdownTrigger`] can be handed to a signal handler (or a test) while
//! the loop polls the matching [`Shutdown`] between cycles.

use std::cell::Cell;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TryRecvError};

/// Create a connected trigger/handle pair
pub fn shutdown_channel() -> (ShutdownTrigger, Shutdown) {
    let (sender, receiver) = bounded(1);
    (
        ShutdownTrigger { sender },
        Shutdown {
            receiver,
            requested: Cell::new(false),
        },
    )
}

/// Requests a shutdown
#[derive(Debug, Clone)]
pub struct ShutdownTrigger {
    sender: Sender<()>,
}

impl ShutdownTrigger {
    /// Ask the loop to stop after its current cycle
    ///
    /// Repeated calls are no-ops.
    pub fn trigger(&self) {
        // Full means a request is already pending
        let _ = self.sender.try_send(());
    }
}

/// Loop-side view of the shutdown request
#[derive(Debug)]
pub struct Shutdown {
    receiver: Receiver<()>,
    requested: Cell<bool>,
}

impl Shutdown {
    /// Non-blocking check; stays true once a request has been seen
    pub fn is_requested(&self) -> bool {
        if self.requested.get() {
            return true;
        }

        match self.receiver.try_recv() {
            Ok(()) => {
                self.requested.set(true);
                true
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => false,
        }
    }

    /// Sleep for `timeout`, returning early with `true` if a request arrives
    pub fn wait(&self, timeout: Duration) -> bool {
        if self.requested.get() {
            return true;
        }

        match self.receiver.recv_timeout(timeout) {
            Ok(()) => {
                self.requested.set(true);
                true
            }
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => {
                // No trigger left; nothing can wake us early
                std::thread::sleep(timeout);
                false
            }
        }
    }
}
