use windows::Win32::{
    Foundation::{E_OUTOFMEMORY, HANDLE, HGLOBAL},
    System::{
        DataExchange::{CloseClipboard, EmptyClipboard, GetClipboardData, OpenClipboard, SetClipboardData},
        Memory::{GMEM_MOVEABLE, GlobalAlloc, GlobalFree, GlobalLock, GlobalSize, GlobalUnlock},
    },
};

use crate::{conversion::clipboard::Clipboard, domain::outcome::ConversionError};

/// `CF_UNICODETEXT`.
const CF_UNICODETEXT_ID: u32 = 13;

/// System clipboard, text only.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Clipboard;

impl Clipboard for Win32Clipboard {
    fn text(&mut self) -> Option<String> {
        let _open = OpenClipboardGuard::open()?;
        read_unicode_text()
    }

    fn set_text(&mut self, text: &str) -> Result<(), ConversionError> {
        let _open = OpenClipboardGuard::open().ok_or(ConversionError::ClipboardUnavailable)?;
        write_unicode_text(text).map_err(|e| {
            tracing::warn!(error = ?e, "clipboard write failed");
            ConversionError::ClipboardUnavailable
        })
    }

    fn clear(&mut self) -> Result<(), ConversionError> {
        let _open = OpenClipboardGuard::open().ok_or(ConversionError::ClipboardUnavailable)?;
        unsafe { EmptyClipboard() }.map_err(|e| {
            tracing::warn!(error = ?e, "EmptyClipboard failed");
            ConversionError::ClipboardUnavailable
        })
    }
}

/// Clipboard ownership for this thread; `None` while another process holds it.
struct OpenClipboardGuard;

impl OpenClipboardGuard {
    fn open() -> Option<Self> {
        unsafe { OpenClipboard(None) }.ok()?;
        Some(Self)
    }
}

impl Drop for OpenClipboardGuard {
    fn drop(&mut self) {
        let _ = unsafe { CloseClipboard() };
    }
}

/// A `GlobalLock`ed memory block viewed as UTF-16 units. Unlocked on drop.
struct LockedUnits {
    handle: HGLOBAL,
    ptr: *mut u16,
    units: usize,
}

impl LockedUnits {
    fn lock(handle: HGLOBAL) -> Option<Self> {
        let units = unsafe { GlobalSize(handle) } / size_of::<u16>();
        let ptr = unsafe { GlobalLock(handle) }.cast::<u16>();
        if ptr.is_null() {
            return None;
        }
        Some(Self { handle, ptr, units })
    }

    fn as_slice(&self) -> &[u16] {
        unsafe { std::slice::from_raw_parts(self.ptr, self.units) }
    }

    fn as_mut_slice(&mut self) -> &mut [u16] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr, self.units) }
    }
}

impl Drop for LockedUnits {
    fn drop(&mut self) {
        let _ = unsafe { GlobalUnlock(self.handle) };
    }
}

/// Allocation freed on drop unless `release`d to the clipboard.
struct OwnedGlobal(HGLOBAL);

impl OwnedGlobal {
    fn alloc(bytes: usize) -> windows::core::Result<Self> {
        unsafe { GlobalAlloc(GMEM_MOVEABLE, bytes) }.map(Self)
    }

    fn release(self) {
        std::mem::forget(self);
    }
}

impl Drop for OwnedGlobal {
    fn drop(&mut self) {
        let _ = unsafe { GlobalFree(Some(self.0)) };
    }
}

/// Text up to the first NUL (or the end of the block). Caller holds the clipboard open.
fn read_unicode_text() -> Option<String> {
    // The handle stays owned by the clipboard.
    let handle = unsafe { GetClipboardData(CF_UNICODETEXT_ID) }.ok()?;
    if handle.0.is_null() {
        return None;
    }

    let locked = LockedUnits::lock(HGLOBAL(handle.0))?;
    let units = locked.as_slice();
    let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
    Some(String::from_utf16_lossy(&units[..end]))
}

/// Replaces the clipboard content with `text`. Caller holds the clipboard open.
fn write_unicode_text(text: &str) -> windows::core::Result<()> {
    unsafe { EmptyClipboard() }?;

    let encoded: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
    let block = OwnedGlobal::alloc(encoded.len() * size_of::<u16>())?;
    let handle = block.0;

    {
        let mut locked = LockedUnits::lock(handle).ok_or_else(crate::helpers::last_error)?;
        let Some(dst) = locked.as_mut_slice().get_mut(..encoded.len()) else {
            return Err(windows::core::Error::from_hresult(E_OUTOFMEMORY));
        };
        dst.copy_from_slice(&encoded);
    }

    unsafe { SetClipboardData(CF_UNICODETEXT_ID, Some(HANDLE(handle.0))) }?;
    // The system owns the block from here on.
    block.release();
    Ok(())
}
