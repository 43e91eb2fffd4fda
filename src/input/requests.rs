//! Single-consumer channel between the hotkey producer and the orchestrator.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
    mpsc::{self, Receiver, SyncSender, TrySendError},
};

use akshara_shift_core::EncodingTag;

use crate::{
    conversion::{
        Orchestrator, busy::BusyFlag, clipboard::Clipboard, input::InputSimulator,
    },
    domain::outcome::SkipReason,
};

/// A trigger asking for the current selection to be converted to `encoding`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConversionRequest {
    pub encoding: EncodingTag,
}

impl ConversionRequest {
    pub const fn new(encoding: EncodingTag) -> Self {
        Self { encoding }
    }
}

/// Producer half. Cheap to clone; drops requests instead of queueing behind a running one.
#[derive(Clone, Debug)]
pub struct RequestSender {
    tx: SyncSender<ConversionRequest>,
    busy: BusyFlag,
    paused: Arc<AtomicBool>,
}

#[derive(Debug)]
pub struct RequestReceiver {
    rx: Receiver<ConversionRequest>,
}

/// Creates the request channel.
///
/// `busy` must be the orchestrator's flag. At most one request waits while none runs.
pub fn channel(busy: BusyFlag, start_paused: bool) -> (RequestSender, RequestReceiver) {
    let (tx, rx) = mpsc::sync_channel(1);
    (
        RequestSender {
            tx,
            busy,
            paused: Arc::new(AtomicBool::new(start_paused)),
        },
        RequestReceiver { rx },
    )
}

impl RequestSender {
    pub fn submit(&self, request: ConversionRequest) -> Result<(), SkipReason> {
        if self.is_paused() {
            return Err(SkipReason::Paused);
        }
        if self.busy.is_busy() {
            return Err(SkipReason::Busy);
        }

        match self.tx.try_send(request) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(SkipReason::Busy),
            Err(TrySendError::Disconnected(_)) => Err(SkipReason::Disconnected),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Flips the paused state and returns the new value.
    pub fn toggle_paused(&self) -> bool {
        let was = self.paused.fetch_xor(true, Ordering::AcqRel);
        let now = !was;
        tracing::info!(paused = now, "conversion hotkeys {}", if now { "paused" } else { "resumed" });
        now
    }
}

/// Runs every received request to completion, one at a time.
///
/// Returns the number of requests processed once all senders are dropped.
pub fn serve<C, I>(receiver: RequestReceiver, orchestrator: &mut Orchestrator<C, I>) -> usize
where
    C: Clipboard,
    I: InputSimulator,
{
    let mut handled = 0;
    for request in receiver.rx {
        let applied = orchestrator.run_conversion(request.encoding);
        tracing::trace!(encoding = %request.encoding, applied, "request handled");
        handled += 1;
    }
    tracing::trace!(handled, "request channel closed");
    handled
}
