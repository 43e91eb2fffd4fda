use crate::domain::outcome::ConversionError;

/// Injects the standard copy/paste shortcuts into the foreground application.
///
/// Fire-and-forget: the effect is only observable through later clipboard state.
/// An `Err` means the keystrokes could not be injected at all.
pub trait InputSimulator {
    fn simulate_copy(&mut self) -> Result<(), ConversionError>;

    fn simulate_paste(&mut self) -> Result<(), ConversionError>;
}
