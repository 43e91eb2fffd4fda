use akshara_shift_core::EncodingTag;

/// Result of one capture-convert-replace run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversionOutcome {
    Applied(Replacement),
    Skipped(SkipReason),
    Failed(ConversionError),
}

impl ConversionOutcome {
    /// `true` only when converted text was pasted.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// What was captured and what replaced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replacement {
    pub encoding: EncodingTag,
    pub captured: String,
    pub converted: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    Busy,
    Paused,
    Disconnected,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::Busy => "busy",
            SkipReason::Paused => "paused",
            SkipReason::Disconnected => "disconnected",
        }
    }
}

/// Synthetic keystroke that the input collaborator failed to inject.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimulatedKey {
    Copy,
    Paste,
}

impl SimulatedKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SimulatedKey::Copy => "copy",
            SimulatedKey::Paste => "paste",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("clipboard is unavailable")]
    ClipboardUnavailable,
    #[error("no text captured after {attempts} attempts")]
    CaptureEmpty { attempts: u32 },
    #[error("failed to simulate {}", .0.as_str())]
    SimulationFailure(SimulatedKey),
    #[error("conversion pipeline panicked")]
    Fault,
}
