//! Hotkey modifier bits (as accepted by `RegisterHotKey`) and action names used in
//! validation messages.

pub const MOD_ALT: u32 = 0x0001;
pub const MOD_CONTROL: u32 = 0x0002;
pub const MOD_SHIFT: u32 = 0x0004;
pub const MOD_WIN: u32 = 0x0008;
pub const MOD_NOREPEAT: u32 = 0x4000;

pub const CONVERT_ML: &str = "Convert selection to ML";
pub const CONVERT_FML: &str = "Convert selection to FML";
pub const PAUSE: &str = "Pause";
