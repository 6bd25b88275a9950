// ── Message retrieval and dispatch ────────────────────────────────────────────
//
// The loop half of the window-procedure contract: pull queued messages,
// translate keystrokes, hand each message to the owning window's WNDPROC.

use crate::ctypes::{DWORD, HWND, LPARAM, POINT, UINT, WPARAM};
#[cfg(windows)]
use crate::ctypes::{BOOL, INT, LRESULT};

// ── Types ─────────────────────────────────────────────────────────────────────

/// Queued message as filled in by `GetMessageW`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct MSG {
    pub hwnd: HWND,
    pub message: UINT,
    pub wParam: WPARAM,
    pub lParam: LPARAM,
    /// Tick count at post time.
    pub time: DWORD,
    /// Cursor position at post time, in screen coordinates.
    pub pt: POINT,
}

// ── Functions ─────────────────────────────────────────────────────────────────

#[cfg(windows)]
#[link(name = "user32", kind = "raw-dylib")]
extern "system" {
    /// Blocks until a message is available for the calling thread, then
    /// copies it into `lpMsg`.
    ///
    /// Despite the `BOOL` return this is a three-way result: 0 when the
    /// retrieved message is `WM_QUIT` (exit the loop), -1 on error (e.g. an
    /// invalid `hWnd`), any other value otherwise. A null `hWnd` retrieves
    /// messages for all windows of the calling thread.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-getmessagew
    pub fn GetMessageW(
        lpMsg: *mut MSG,
        hWnd: HWND,
        wMsgFilterMin: UINT,
        wMsgFilterMax: UINT,
    ) -> BOOL;

    /// Translates virtual-key messages into character messages, posted back
    /// to the queue for the next `GetMessageW` pass.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-translatemessage
    pub fn TranslateMessage(lpMsg: *const MSG) -> BOOL;

    /// Dispatches a retrieved message to its window procedure and returns
    /// whatever the procedure returns.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-dispatchmessagew
    pub fn DispatchMessageW(lpMsg: *const MSG) -> LRESULT;

    /// Posts a `WM_QUIT` with the given exit code to the calling thread's
    /// queue, terminating its message loop.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-postquitmessage
    pub fn PostQuitMessage(nExitCode: INT);

    /// Posts a message to a window's queue without waiting for it to be
    /// processed.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-postmessagew
    pub fn PostMessageW(
        hWnd: HWND,
        Msg: UINT,
        wParam: WPARAM,
        lParam: LPARAM,
    ) -> BOOL;

    /// Sends a message directly to a window's procedure and blocks until it
    /// has been processed.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-sendmessagew
    pub fn SendMessageW(
        hWnd: HWND,
        Msg: UINT,
        wParam: WPARAM,
        lParam: LPARAM,
    ) -> LRESULT;
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Six fields, fixed by the ABI; `pt` trails so the 64-bit size rounds
    /// to 48.
    #[test]
    #[cfg(target_pointer_width = "64")]
    fn msg_layout() {
        use std::mem::{align_of, size_of};
        assert_eq!(size_of::<MSG>(), 48);
        assert_eq!(align_of::<MSG>(), 8);
    }

    #[test]
    #[cfg(target_pointer_width = "32")]
    fn msg_layout() {
        assert_eq!(std::mem::size_of::<MSG>(), 28);
    }

    #[test]
    fn msg_default_is_zeroed() {
        let msg = MSG::default();
        assert!(msg.hwnd.is_null());
        assert_eq!(msg.message, 0);
        assert_eq!(msg.wParam.0, 0);
        assert_eq!(msg.lParam.0, 0);
        assert_eq!(msg.time, 0);
        assert_eq!(msg.pt, POINT::default());
    }
}
