use akshara_shift_core::EncodingTag;

use super::requests::{ConversionRequest, RequestSender};
use crate::config::{self, Hotkey};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HotkeyAction {
    ConvertMl,
    ConvertFml,
    PauseToggle,
}

// 20000+ keeps hotkey ids clear of any control ids.
const HK_ID_BASE: i32 = 20000;

pub const HK_CONVERT_ML_ID: i32 = HK_ID_BASE + 1;
pub const HK_CONVERT_FML_ID: i32 = HK_ID_BASE + 2;
pub const HK_PAUSE_TOGGLE_ID: i32 = HK_ID_BASE + 3;

pub const ALL_IDS: [i32; 3] = [HK_CONVERT_ML_ID, HK_CONVERT_FML_ID, HK_PAUSE_TOGGLE_ID];

pub fn action_from_id(id: i32) -> Option<HotkeyAction> {
    match id {
        HK_CONVERT_ML_ID => Some(HotkeyAction::ConvertMl),
        HK_CONVERT_FML_ID => Some(HotkeyAction::ConvertFml),
        HK_PAUSE_TOGGLE_ID => Some(HotkeyAction::PauseToggle),
        _ => None,
    }
}

/// Hotkey bindings from config, paired with their ids. Unbound actions are skipped.
pub fn bindings(cfg: &config::Config) -> Vec<(i32, Hotkey)> {
    [
        (HK_CONVERT_ML_ID, cfg.hotkey_convert_ml),
        (HK_CONVERT_FML_ID, cfg.hotkey_convert_fml),
        (HK_PAUSE_TOGGLE_ID, cfg.hotkey_pause),
    ]
    .into_iter()
    .filter_map(|(id, hk)| hk.map(|hk| (id, hk)))
    .collect()
}

impl HotkeyAction {
    pub fn encoding(self) -> Option<EncodingTag> {
        match self {
            HotkeyAction::ConvertMl => Some(EncodingTag::Ml),
            HotkeyAction::ConvertFml => Some(EncodingTag::Fml),
            HotkeyAction::PauseToggle => None,
        }
    }

    /// Forwards the action to the conversion worker.
    pub fn dispatch(self, sender: &RequestSender) {
        let Some(encoding) = self.encoding() else {
            sender.toggle_paused();
            return;
        };

        match sender.submit(ConversionRequest::new(encoding)) {
            Ok(()) => tracing::trace!(action = ?self, "conversion requested"),
            Err(reason) => {
                tracing::trace!(action = ?self, reason = reason.as_str(), "request dropped");
            }
        }
    }
}
