// ── Window creation and visibility ────────────────────────────────────────────
//
// Source of truth: winuser.h. Numeric values are externally defined by the
// OS and preserved bit-for-bit; parameter order and types mirror the native
// exports exactly.

use bitflags::bitflags;

use crate::ctypes::{DWORD, HWND, INT, LPARAM, LRESULT, WPARAM};
#[cfg(windows)]
use crate::ctypes::{BOOL, HINSTANCE, HMENU, LPCWSTR, LPVOID};

// ── Types ─────────────────────────────────────────────────────────────────────

/// Window-procedure callback.
///
/// Receives the window handle, the message identifier, and the two
/// machine-word message parameters; returns a machine-word result. The
/// shape is fixed by user32's dispatch mechanism and must not be altered.
/// `None` crosses the ABI as a null function pointer.
pub type WNDPROC =
    Option<unsafe extern "system" fn(HWND, u32, WPARAM, LPARAM) -> LRESULT>;

// ── Functions ─────────────────────────────────────────────────────────────────

#[cfg(windows)]
#[link(name = "user32", kind = "raw-dylib")]
extern "system" {
    /// Creates an overlapped, pop-up, or child window with an extended
    /// window style.
    ///
    /// `lpClassName` and `lpWindowName` may be null. Returns a null `HWND`
    /// on failure; query `GetLastError` for the reason.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-createwindowexw
    pub fn CreateWindowExW(
        dwExStyle: WS_EX,
        lpClassName: LPCWSTR,
        lpWindowName: LPCWSTR,
        dwStyle: WS,
        X: INT,
        Y: INT,
        nWidth: INT,
        nHeight: INT,
        hWndParent: HWND,
        hMenu: HMENU,
        hInstance: HINSTANCE,
        lpParam: LPVOID,
    ) -> HWND;

    /// Calls the default window procedure to provide default processing for
    /// any window messages that an application does not process.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-defwindowprocw
    pub fn DefWindowProcW(
        hWnd: HWND,
        Msg: u32,
        wParam: WPARAM,
        lParam: LPARAM,
    ) -> LRESULT;

    /// Sets the specified window's show state.
    ///
    /// `nCmdShow` is one of the `SW_*` commands. Returns the previous
    /// visibility state, not success or failure.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-showwindow
    pub fn ShowWindow(hWnd: HWND, nCmdShow: INT) -> BOOL;

    /// Sets the show state of a window without waiting for the operation to
    /// complete.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-showwindowasync
    pub fn ShowWindowAsync(hWnd: HWND, nCmdShow: INT) -> BOOL;

    /// Updates the client area of the specified window by sending a
    /// `WM_PAINT` message to the window if the window's update region is
    /// not empty.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-updatewindow
    pub fn UpdateWindow(hWnd: HWND) -> BOOL;

    /// Destroys the specified window and sends `WM_DESTROY` / `WM_NCDESTROY`
    /// to it.
    ///
    /// Must be called from the thread that created the window.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-destroywindow
    pub fn DestroyWindow(hWnd: HWND) -> BOOL;
}

/// Creates an overlapped, pop-up, or child window.
///
/// Forwards to [`CreateWindowExW`] with extended style zero; the native
/// headers define `CreateWindowW` the same way (user32 exports no such
/// symbol).
///
/// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-createwindoww
///
/// # Safety
///
/// Same contract as [`CreateWindowExW`].
#[cfg(windows)]
#[allow(clippy::too_many_arguments)]
pub unsafe fn CreateWindowW(
    lpClassName: LPCWSTR,
    lpWindowName: LPCWSTR,
    dwStyle: WS,
    X: INT,
    Y: INT,
    nWidth: INT,
    nHeight: INT,
    hWndParent: HWND,
    hMenu: HMENU,
    hInstance: HINSTANCE,
    lpParam: LPVOID,
) -> HWND {
    CreateWindowExW(
        WS_EX::empty(),
        lpClassName,
        lpWindowName,
        dwStyle,
        X,
        Y,
        nWidth,
        nHeight,
        hWndParent,
        hMenu,
        hInstance,
        lpParam,
    )
}

// ── Constants ─────────────────────────────────────────────────────────────────

bitflags! {
    /// `WS_*` — window styles.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/winmsg/window-styles
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct WS: DWORD {
        const BORDER           = 0x0080_0000;
        /// `WS_BORDER | WS_DLGFRAME`
        const CAPTION          = 0x00C0_0000;
        const CHILD            = 0x4000_0000;
        const CLIPCHILDREN     = 0x0200_0000;
        const CLIPSIBLINGS     = 0x0400_0000;
        const DISABLED         = 0x0800_0000;
        const DLGFRAME         = 0x0040_0000;
        const GROUP            = 0x0002_0000;
        const HSCROLL          = 0x0010_0000;
        const MAXIMIZE         = 0x0100_0000;
        const MAXIMIZEBOX      = 0x0001_0000;
        const MINIMIZE         = 0x2000_0000;
        const MINIMIZEBOX      = 0x0002_0000;
        const OVERLAPPED       = 0x0000_0000;
        const POPUP            = 0x8000_0000;
        const SYSMENU          = 0x0008_0000;
        const TABSTOP          = 0x0001_0000;
        const THICKFRAME       = 0x0004_0000;
        const VISIBLE          = 0x1000_0000;
        const VSCROLL          = 0x0020_0000;

        const CHILDWINDOW      = Self::CHILD.bits();
        const ICONIC           = Self::MINIMIZE.bits();
        const OVERLAPPEDWINDOW = Self::OVERLAPPED.bits()
            | Self::CAPTION.bits()
            | Self::SYSMENU.bits()
            | Self::THICKFRAME.bits()
            | Self::MINIMIZEBOX.bits()
            | Self::MAXIMIZEBOX.bits();
        const POPUPWINDOW      = Self::POPUP.bits()
            | Self::BORDER.bits()
            | Self::SYSMENU.bits();
        const SIZEBOX          = Self::THICKFRAME.bits();
        const TILED            = Self::OVERLAPPED.bits();
        const TILEDWINDOW      = Self::OVERLAPPEDWINDOW.bits();
    }
}

bitflags! {
    /// `WS_EX_*` — extended window styles.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/winmsg/extended-window-styles
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct WS_EX: DWORD {
        const ACCEPTFILES         = 0x0000_0010;
        const APPWINDOW           = 0x0004_0000;
        const CLIENTEDGE          = 0x0000_0200;
        const COMPOSITED          = 0x0200_0000;
        const CONTEXTHELP         = 0x0000_0400;
        const CONTROLPARENT       = 0x0001_0000;
        const DLGMODALFRAME       = 0x0000_0001;
        const LAYERED             = 0x0008_0000;
        const LAYOUTRTL           = 0x0040_0000;
        const LEFT                = 0x0000_0000;
        const LEFTSCROLLBAR       = 0x0000_4000;
        const LTRREADING          = 0x0000_0000;
        const MDICHILD            = 0x0000_0040;
        const NOACTIVATE          = 0x0800_0000;
        const NOINHERITLAYOUT     = 0x0010_0000;
        const NOPARENTNOTIFY      = 0x0000_0004;
        const NOREDIRECTIONBITMAP = 0x0020_0000;
        const RIGHT               = 0x0000_1000;
        const RIGHTSCROLLBAR      = 0x0000_0000;
        const RTLREADING          = 0x0000_2000;
        const STATICEDGE          = 0x0002_0000;
        const TOOLWINDOW          = 0x0000_0080;
        const TOPMOST             = 0x0000_0008;
        const TRANSPARENT         = 0x0000_0020;
        const WINDOWEDGE          = 0x0000_0100;

        const OVERLAPPEDWINDOW    = Self::WINDOWEDGE.bits()
            | Self::CLIENTEDGE.bits();
        const PALETTEWINDOW       = Self::WINDOWEDGE.bits()
            | Self::TOOLWINDOW.bits()
            | Self::TOPMOST.bits();
    }
}

// SW_* — ShowWindow() commands (nCmdShow).
pub const SW_HIDE: INT = 0;
pub const SW_SHOWNORMAL: INT = 1;
pub const SW_NORMAL: INT = 1;
pub const SW_SHOWMINIMIZED: INT = 2;
pub const SW_SHOWMAXIMIZED: INT = 3;
pub const SW_MAXIMIZE: INT = 3;
pub const SW_SHOWNOACTIVATE: INT = 4;
pub const SW_SHOW: INT = 5;
pub const SW_MINIMIZE: INT = 6;
pub const SW_SHOWMINNOACTIVE: INT = 7;
pub const SW_SHOWNA: INT = 8;
pub const SW_RESTORE: INT = 9;
pub const SW_SHOWDEFAULT: INT = 10;
pub const SW_FORCEMINIMIZE: INT = 11;
pub const SW_MAX: INT = 11;

// SW_* — status values carried by WM_SHOWWINDOW's lParam.
pub const SW_PARENTCLOSING: INT = 1;
pub const SW_OTHERZOOM: INT = 2;
pub const SW_PARENTOPENING: INT = 3;
pub const SW_OTHERUNZOOM: INT = 4;

// WA_* — WM_ACTIVATE state values (low word of wParam).
pub const WA_INACTIVE: u32 = 0;
pub const WA_ACTIVE: u32 = 1;
pub const WA_CLICKACTIVE: u32 = 2;

/// Special value for the `X`, `Y`, `nWidth`, and `nHeight` parameters of
/// `CreateWindowW` / `CreateWindowExW`: let the system pick.
pub const CW_USEDEFAULT: INT = 0x8000_0000_u32 as INT;

/// Pseudo-parent for message-only windows (not visible, no z-order, only
/// dispatches messages).
///
/// https://learn.microsoft.com/en-us/windows/win32/winmsg/window-features#message-only-windows
pub const HWND_MESSAGE: HWND = HWND(-3_isize as _);

/// Null parent: create a top-level window.
pub const HWND_DESKTOP: HWND = HWND(std::ptr::null_mut());

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_primitive_values() {
        assert_eq!(WS::BORDER.bits(), 0x0080_0000);
        assert_eq!(WS::CAPTION.bits(), 0x00C0_0000);
        assert_eq!(WS::CHILD.bits(), 0x4000_0000);
        assert_eq!(WS::CLIPCHILDREN.bits(), 0x0200_0000);
        assert_eq!(WS::CLIPSIBLINGS.bits(), 0x0400_0000);
        assert_eq!(WS::DISABLED.bits(), 0x0800_0000);
        assert_eq!(WS::DLGFRAME.bits(), 0x0040_0000);
        assert_eq!(WS::GROUP.bits(), 0x0002_0000);
        assert_eq!(WS::HSCROLL.bits(), 0x0010_0000);
        assert_eq!(WS::MAXIMIZE.bits(), 0x0100_0000);
        assert_eq!(WS::MAXIMIZEBOX.bits(), 0x0001_0000);
        assert_eq!(WS::MINIMIZE.bits(), 0x2000_0000);
        assert_eq!(WS::MINIMIZEBOX.bits(), 0x0002_0000);
        assert_eq!(WS::OVERLAPPED.bits(), 0x0000_0000);
        assert_eq!(WS::POPUP.bits(), 0x8000_0000);
        assert_eq!(WS::SYSMENU.bits(), 0x0008_0000);
        assert_eq!(WS::TABSTOP.bits(), 0x0001_0000);
        assert_eq!(WS::THICKFRAME.bits(), 0x0004_0000);
        assert_eq!(WS::VISIBLE.bits(), 0x1000_0000);
        assert_eq!(WS::VSCROLL.bits(), 0x0020_0000);
    }

    #[test]
    fn ws_composites() {
        // WS_CAPTION folds WS_BORDER and WS_DLGFRAME together.
        assert_eq!(WS::CAPTION, WS::BORDER | WS::DLGFRAME);
        assert_eq!(WS::OVERLAPPEDWINDOW.bits(), 0x00CF_0000);
        assert_eq!(WS::POPUPWINDOW.bits(), 0x8088_0000);
        assert_eq!(WS::CHILDWINDOW, WS::CHILD);
        assert_eq!(WS::ICONIC, WS::MINIMIZE);
        assert_eq!(WS::SIZEBOX, WS::THICKFRAME);
        assert_eq!(WS::TILED, WS::OVERLAPPED);
        assert_eq!(WS::TILEDWINDOW, WS::OVERLAPPEDWINDOW);
    }

    #[test]
    fn ws_ex_primitive_values() {
        assert_eq!(WS_EX::ACCEPTFILES.bits(), 0x0000_0010);
        assert_eq!(WS_EX::APPWINDOW.bits(), 0x0004_0000);
        assert_eq!(WS_EX::CLIENTEDGE.bits(), 0x0000_0200);
        assert_eq!(WS_EX::COMPOSITED.bits(), 0x0200_0000);
        assert_eq!(WS_EX::CONTEXTHELP.bits(), 0x0000_0400);
        assert_eq!(WS_EX::CONTROLPARENT.bits(), 0x0001_0000);
        assert_eq!(WS_EX::DLGMODALFRAME.bits(), 0x0000_0001);
        assert_eq!(WS_EX::LAYERED.bits(), 0x0008_0000);
        assert_eq!(WS_EX::LAYOUTRTL.bits(), 0x0040_0000);
        assert_eq!(WS_EX::LEFTSCROLLBAR.bits(), 0x0000_4000);
        assert_eq!(WS_EX::MDICHILD.bits(), 0x0000_0040);
        assert_eq!(WS_EX::NOACTIVATE.bits(), 0x0800_0000);
        assert_eq!(WS_EX::NOINHERITLAYOUT.bits(), 0x0010_0000);
        assert_eq!(WS_EX::NOPARENTNOTIFY.bits(), 0x0000_0004);
        assert_eq!(WS_EX::NOREDIRECTIONBITMAP.bits(), 0x0020_0000);
        assert_eq!(WS_EX::RIGHT.bits(), 0x0000_1000);
        assert_eq!(WS_EX::RTLREADING.bits(), 0x0000_2000);
        assert_eq!(WS_EX::STATICEDGE.bits(), 0x0002_0000);
        assert_eq!(WS_EX::TOOLWINDOW.bits(), 0x0000_0080);
        assert_eq!(WS_EX::TOPMOST.bits(), 0x0000_0008);
        assert_eq!(WS_EX::TRANSPARENT.bits(), 0x0000_0020);
        assert_eq!(WS_EX::WINDOWEDGE.bits(), 0x0000_0100);
        // Zero-valued direction defaults.
        assert_eq!(WS_EX::LEFT.bits(), 0);
        assert_eq!(WS_EX::LTRREADING.bits(), 0);
        assert_eq!(WS_EX::RIGHTSCROLLBAR.bits(), 0);
    }

    #[test]
    fn ws_ex_composites() {
        assert_eq!(WS_EX::OVERLAPPEDWINDOW.bits(), 0x0000_0300);
        assert_eq!(WS_EX::PALETTEWINDOW.bits(), 0x0000_0188);
    }

    #[test]
    fn sw_commands() {
        assert_eq!(SW_HIDE, 0);
        assert_eq!(SW_SHOWNORMAL, 1);
        assert_eq!(SW_NORMAL, SW_SHOWNORMAL);
        assert_eq!(SW_SHOWMINIMIZED, 2);
        assert_eq!(SW_SHOWMAXIMIZED, 3);
        assert_eq!(SW_MAXIMIZE, SW_SHOWMAXIMIZED);
        assert_eq!(SW_SHOWNOACTIVATE, 4);
        assert_eq!(SW_SHOW, 5);
        assert_eq!(SW_MINIMIZE, 6);
        assert_eq!(SW_SHOWMINNOACTIVE, 7);
        assert_eq!(SW_SHOWNA, 8);
        assert_eq!(SW_RESTORE, 9);
        assert_eq!(SW_SHOWDEFAULT, 10);
        assert_eq!(SW_FORCEMINIMIZE, 11);
        assert_eq!(SW_MAX, 11);
    }

    #[test]
    fn sw_showwindow_status_values() {
        assert_eq!(SW_PARENTCLOSING, 1);
        assert_eq!(SW_OTHERZOOM, 2);
        assert_eq!(SW_PARENTOPENING, 3);
        assert_eq!(SW_OTHERUNZOOM, 4);
    }

    #[test]
    fn wa_states() {
        assert_eq!(WA_INACTIVE, 0);
        assert_eq!(WA_ACTIVE, 1);
        assert_eq!(WA_CLICKACTIVE, 2);
    }

    #[test]
    fn cw_usedefault_bit_pattern() {
        assert_eq!(CW_USEDEFAULT as u32, 0x8000_0000);
    }

    #[test]
    fn special_parent_handles() {
        assert!(HWND_DESKTOP.is_null());
        assert_eq!(HWND_MESSAGE.0 as isize, -3);
    }
}
