//! Small Win32 helpers: last-error conversion and the single-instance mutex.

use windows::{
    Win32::{
        Foundation::{CloseHandle, ERROR_ALREADY_EXISTS, GetLastError, HANDLE},
        System::Threading::CreateMutexW,
    },
    core::{Error, HRESULT, Result, w},
};

/// Retrieve the last OS error as a `windows::core::Error`.
pub fn last_error() -> Error {
    Error::from_hresult(HRESULT::from_win32(unsafe { GetLastError() }.0))
}

/// Holds the named mutex that marks the running instance. Released on drop.
pub struct SingleInstanceGuard(HANDLE);

impl Drop for SingleInstanceGuard {
    fn drop(&mut self) {
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

/// Acquire the single instance mutex.
///
/// Returns `Ok(None)` when another instance already owns it; the caller should exit.
pub fn single_instance_guard() -> Result<Option<SingleInstanceGuard>> {
    unsafe {
        let h = CreateMutexW(None, false, w!("Local\\AksharaShift_SingleInstance"))?;

        if GetLastError() == ERROR_ALREADY_EXISTS {
            let _ = CloseHandle(h);
            return Ok(None);
        }

        Ok(Some(SingleInstanceGuard(h)))
    }
}
