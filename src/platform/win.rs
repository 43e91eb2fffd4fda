//! Windows host: global hotkeys on the main thread, conversions on a worker.
//!
//! Hotkeys are registered thread-wide (no window), so `WM_HOTKEY` arrives through
//! the plain `GetMessageW` loop below. Each trigger becomes a request on the
//! bounded channel; the `conversion` worker runs them one at a time.

pub(crate) mod clipboard;
pub(crate) mod hotkeys;
pub(crate) mod input;

use std::thread;

use akshara_shift_core::ProfileSet;
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, MSG, TranslateMessage, WM_HOTKEY,
};

use self::{clipboard::Win32Clipboard, input::SendInputSimulator};
use crate::{
    app::AppError,
    config,
    conversion::Orchestrator,
    helpers,
    input::{
        hotkeys::action_from_id,
        requests::{self, RequestSender},
    },
};

const WORKER_THREAD_NAME: &str = "conversion";

/// Runs until the message loop receives `WM_QUIT`.
pub fn run(cfg: &config::Config, profiles: ProfileSet) -> Result<(), AppError> {
    let mut orchestrator = Orchestrator::new(
        Win32Clipboard,
        SendInputSimulator::default(),
        profiles,
        cfg.timings(),
    );
    let (sender, receiver) = requests::channel(orchestrator.busy_flag(), cfg.start_paused);

    let worker = thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_string())
        .spawn(move || requests::serve(receiver, &mut orchestrator))?;

    let registered = hotkeys::register_from_config(cfg);
    let looped = registered.and_then(|()| {
        tracing::info!(paused = cfg.start_paused, "hotkeys registered");
        message_loop(&sender)
    });

    if let Err(e) = hotkeys::unregister_all() {
        tracing::warn!(error = ?e, "unregister hotkeys failed");
    }

    drop(sender);
    match worker.join() {
        Ok(handled) => tracing::info!(handled, "conversion worker stopped"),
        Err(_) => tracing::error!("conversion worker panicked"),
    }

    looped.map_err(AppError::from)
}

fn message_loop(sender: &RequestSender) -> windows::core::Result<()> {
    unsafe {
        let mut msg = MSG::default();
        loop {
            let r = GetMessageW(&raw mut msg, None, 0, 0);
            if r.0 == -1 {
                return Err(helpers::last_error());
            }
            if r.0 == 0 {
                break;
            }

            if msg.message == WM_HOTKEY {
                on_hotkey(sender, msg.wParam.0);
                continue;
            }

            let _ = TranslateMessage(&raw const msg);
            DispatchMessageW(&raw const msg);
        }
    }
    Ok(())
}

fn on_hotkey(sender: &RequestSender, wparam: usize) {
    let Some(action) = i32::try_from(wparam).ok().and_then(action_from_id) else {
        tracing::trace!(wparam, "unknown hotkey id");
        return;
    };

    action.dispatch(sender);
}
