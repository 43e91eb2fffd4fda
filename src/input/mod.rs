pub mod hotkeys;
pub mod requests;
