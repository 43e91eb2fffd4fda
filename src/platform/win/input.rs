use std::{
    thread,
    time::{Duration, Instant},
};

use windows::Win32::UI::Input::KeyboardAndMouse::{
    GetAsyncKeyState, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBD_EVENT_FLAGS, KEYBDINPUT,
    KEYEVENTF_KEYUP, SendInput, VIRTUAL_KEY, VK_CONTROL, VK_LWIN, VK_MENU, VK_RWIN, VK_SHIFT,
};

use crate::{
    conversion::input::InputSimulator,
    domain::outcome::{ConversionError, SimulatedKey},
};

/// Virtual key code for the `C` key (Ctrl+C copies the selection).
const VK_C_KEY: VIRTUAL_KEY = VIRTUAL_KEY(0x43);

/// Virtual key code for the `V` key (Ctrl+V pastes the converted text).
const VK_V_KEY: VIRTUAL_KEY = VIRTUAL_KEY(0x56);

/// Modifiers of the triggering hotkey that would turn Ctrl+C into a different chord.
const HOTKEY_MODIFIERS: [VIRTUAL_KEY; 4] = [VK_MENU, VK_SHIFT, VK_LWIN, VK_RWIN];

/// Copy/paste through `SendInput`.
#[derive(Debug, Clone, Copy)]
pub struct SendInputSimulator {
    /// How long to wait for the user to let go of the hotkey modifiers before copying.
    pub modifier_release_timeout: Duration,
}

impl Default for SendInputSimulator {
    fn default() -> Self {
        Self {
            modifier_release_timeout: Duration::from_millis(500),
        }
    }
}

impl InputSimulator for SendInputSimulator {
    fn simulate_copy(&mut self) -> Result<(), ConversionError> {
        if !wait_modifiers_released(self.modifier_release_timeout) {
            tracing::debug!("hotkey modifiers still held, copying anyway");
        }
        send_ctrl_combo(VK_C_KEY)
            .then_some(())
            .ok_or(ConversionError::SimulationFailure(SimulatedKey::Copy))
    }

    fn simulate_paste(&mut self) -> Result<(), ConversionError> {
        send_ctrl_combo(VK_V_KEY)
            .then_some(())
            .ok_or(ConversionError::SimulationFailure(SimulatedKey::Paste))
    }
}

/// Waits until Alt, Shift and both Win keys are up, or the timeout elapses.
///
/// Returns `true` as soon as none of them is pressed.
fn wait_modifiers_released(timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;

    while Instant::now() < deadline {
        let released = HOTKEY_MODIFIERS.iter().all(|vk| {
            let state = unsafe { GetAsyncKeyState(i32::from(vk.0)) }.cast_unsigned();
            (state & 0x8000) == 0
        });
        if released {
            return true;
        }

        thread::sleep(Duration::from_millis(1));
    }

    false
}

/// Presses Ctrl, taps `vk`, then releases Ctrl.
///
/// Returns `true` if all input events were sent.
fn send_ctrl_combo(vk: VIRTUAL_KEY) -> bool {
    let mut seq = KeySequence::new();
    seq.down(VK_CONTROL) && KeySequence::tap(vk)
}

/// Tracks pressed keys and releases them in reverse order on drop.
struct KeySequence {
    pressed: Vec<VIRTUAL_KEY>,
}

impl KeySequence {
    fn new() -> Self {
        Self {
            pressed: Vec::new(),
        }
    }

    /// Sends key down and records the key for release.
    fn down(&mut self, vk: VIRTUAL_KEY) -> bool {
        send_key(vk, false).then(|| self.pressed.push(vk)).is_some()
    }

    /// Key down then key up.
    fn tap(vk: VIRTUAL_KEY) -> bool {
        send_key(vk, false) && send_key(vk, true)
    }
}

impl Drop for KeySequence {
    fn drop(&mut self) {
        for vk in self.pressed.drain(..).rev() {
            let _ = send_key(vk, true);
        }
    }
}

fn input_struct_size_i32() -> Option<i32> {
    i32::try_from(std::mem::size_of::<INPUT>()).ok()
}

/// Sends a single virtual key event. Returns `true` if `SendInput` inserted it.
fn send_key(vk: VIRTUAL_KEY, key_up: bool) -> bool {
    let input = INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: vk,
                wScan: 0,
                dwFlags: if key_up {
                    KEYEVENTF_KEYUP
                } else {
                    KEYBD_EVENT_FLAGS::default()
                },
                time: 0,
                dwExtraInfo: 0,
            },
        },
    };

    let Some(input_size) = input_struct_size_i32() else {
        return false;
    };

    let sent = unsafe { SendInput(&[input], input_size) };
    usize::try_from(sent).is_ok_and(|n| n != 0)
}
