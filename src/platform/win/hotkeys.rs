use windows::{
    Win32::{
        Foundation::ERROR_HOTKEY_NOT_REGISTERED,
        UI::Input::KeyboardAndMouse::{HOT_KEY_MODIFIERS, RegisterHotKey, UnregisterHotKey},
    },
    core::HRESULT,
};

use crate::{
    config::{self, MOD_NOREPEAT},
    input::hotkeys::{ALL_IDS, bindings},
};

// Hotkeys are registered without a window, so WM_HOTKEY lands in the calling
// thread's queue; register, unregister and the message loop share one thread.

fn unregister_one_quiet(id: i32) -> windows::core::Result<()> {
    if let Err(e) = unsafe { UnregisterHotKey(None, id) }
        && e.code() != HRESULT::from_win32(ERROR_HOTKEY_NOT_REGISTERED.0)
    {
        return Err(e);
    }
    Ok(())
}

pub fn unregister_all() -> windows::core::Result<()> {
    for id in ALL_IDS {
        unregister_one_quiet(id)?;
    }

    Ok(())
}

pub fn register_from_config(cfg: &config::Config) -> windows::core::Result<()> {
    unregister_all()?;

    for (id, hk) in bindings(cfg) {
        tracing::debug!(id, mods = hk.mods, vk = hk.vk, "RegisterHotKey");
        unsafe {
            RegisterHotKey(None, id, HOT_KEY_MODIFIERS(hk.mods | MOD_NOREPEAT), hk.vk)?;
        }
    }

    Ok(())
}
