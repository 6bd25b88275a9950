// ── Window-class registration ─────────────────────────────────────────────────

use bitflags::bitflags;

use super::window::WNDPROC;
use crate::ctypes::{DWORD, HBRUSH, HCURSOR, HICON, HINSTANCE, INT, LPCWSTR, UINT};
#[cfg(windows)]
use crate::ctypes::{ATOM, BOOL};

// ── Types ─────────────────────────────────────────────────────────────────────

/// Window-class descriptor for `RegisterClassExW`.
///
/// `cbSize` must be set to `size_of::<WNDCLASSEXW>()` before registration;
/// the struct layout is fixed by the ABI and must not be reordered.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct WNDCLASSEXW {
    pub cbSize: UINT,
    pub style: CS,
    pub lpfnWndProc: WNDPROC,
    pub cbClsExtra: INT,
    pub cbWndExtra: INT,
    pub hInstance: HINSTANCE,
    pub hIcon: HICON,
    pub hCursor: HCURSOR,
    pub hbrBackground: HBRUSH,
    pub lpszMenuName: LPCWSTR,
    pub lpszClassName: LPCWSTR,
    pub hIconSm: HICON,
}

// ── Functions ─────────────────────────────────────────────────────────────────

#[cfg(windows)]
#[link(name = "user32", kind = "raw-dylib")]
extern "system" {
    /// Registers a window class for subsequent `CreateWindowExW` calls.
    ///
    /// Returns the class atom, or 0 on failure.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-registerclassexw
    pub fn RegisterClassExW(lpwcx: *const WNDCLASSEXW) -> ATOM;

    /// Unregisters a window class previously registered by this module.
    ///
    /// All windows of the class must be destroyed first.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-unregisterclassw
    pub fn UnregisterClassW(lpClassName: LPCWSTR, hInstance: HINSTANCE) -> BOOL;

    /// Loads a cursor resource; pass a null `hInstance` and an `IDC_*`
    /// identifier for the predefined system cursors.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-loadcursorw
    pub fn LoadCursorW(hInstance: HINSTANCE, lpCursorName: LPCWSTR) -> HCURSOR;

    /// Loads an icon resource; pass a null `hInstance` and an `IDI_*`
    /// identifier for the predefined system icons.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-loadiconw
    pub fn LoadIconW(hInstance: HINSTANCE, lpIconName: LPCWSTR) -> HICON;
}

// ── Constants ─────────────────────────────────────────────────────────────────

bitflags! {
    /// `CS_*` — window-class styles.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/winmsg/window-class-styles
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CS: DWORD {
        const VREDRAW         = 0x0001;
        const HREDRAW         = 0x0002;
        const DBLCLKS         = 0x0008;
        const OWNDC           = 0x0020;
        const CLASSDC         = 0x0040;
        const PARENTDC        = 0x0080;
        const NOCLOSE         = 0x0200;
        const SAVEBITS        = 0x0800;
        const BYTEALIGNCLIENT = 0x1000;
        const BYTEALIGNWINDOW = 0x2000;
        const GLOBALCLASS     = 0x4000;
        const DROPSHADOW      = 0x0002_0000;
    }
}

// IDC_* — predefined cursors. These are integer resource identifiers
// smuggled through the LPCWSTR parameter of LoadCursorW (MAKEINTRESOURCE).
pub const IDC_ARROW: LPCWSTR = 32512 as LPCWSTR;
pub const IDC_IBEAM: LPCWSTR = 32513 as LPCWSTR;
pub const IDC_WAIT: LPCWSTR = 32514 as LPCWSTR;
pub const IDC_CROSS: LPCWSTR = 32515 as LPCWSTR;
pub const IDC_UPARROW: LPCWSTR = 32516 as LPCWSTR;
pub const IDC_SIZENWSE: LPCWSTR = 32642 as LPCWSTR;
pub const IDC_SIZENESW: LPCWSTR = 32643 as LPCWSTR;
pub const IDC_SIZEWE: LPCWSTR = 32644 as LPCWSTR;
pub const IDC_SIZENS: LPCWSTR = 32645 as LPCWSTR;
pub const IDC_SIZEALL: LPCWSTR = 32646 as LPCWSTR;
pub const IDC_NO: LPCWSTR = 32648 as LPCWSTR;
pub const IDC_HAND: LPCWSTR = 32649 as LPCWSTR;
pub const IDC_APPSTARTING: LPCWSTR = 32650 as LPCWSTR;
pub const IDC_HELP: LPCWSTR = 32651 as LPCWSTR;

// IDI_* — predefined icons, same MAKEINTRESOURCE convention.
pub const IDI_APPLICATION: LPCWSTR = 32512 as LPCWSTR;
pub const IDI_HAND: LPCWSTR = 32513 as LPCWSTR;
pub const IDI_QUESTION: LPCWSTR = 32514 as LPCWSTR;
pub const IDI_EXCLAMATION: LPCWSTR = 32515 as LPCWSTR;
pub const IDI_ASTERISK: LPCWSTR = 32516 as LPCWSTR;
pub const IDI_WINLOGO: LPCWSTR = 32517 as LPCWSTR;
pub const IDI_SHIELD: LPCWSTR = 32518 as LPCWSTR;
pub const IDI_WARNING: LPCWSTR = IDI_EXCLAMATION;
pub const IDI_ERROR: LPCWSTR = IDI_HAND;
pub const IDI_INFORMATION: LPCWSTR = IDI_ASTERISK;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cs_values() {
        assert_eq!(CS::VREDRAW.bits(), 0x0001);
        assert_eq!(CS::HREDRAW.bits(), 0x0002);
        assert_eq!(CS::DBLCLKS.bits(), 0x0008);
        assert_eq!(CS::OWNDC.bits(), 0x0020);
        assert_eq!(CS::CLASSDC.bits(), 0x0040);
        assert_eq!(CS::PARENTDC.bits(), 0x0080);
        assert_eq!(CS::NOCLOSE.bits(), 0x0200);
        assert_eq!(CS::SAVEBITS.bits(), 0x0800);
        assert_eq!(CS::BYTEALIGNCLIENT.bits(), 0x1000);
        assert_eq!(CS::BYTEALIGNWINDOW.bits(), 0x2000);
        assert_eq!(CS::GLOBALCLASS.bits(), 0x4000);
        assert_eq!(CS::DROPSHADOW.bits(), 0x0002_0000);
    }

    #[test]
    fn cursor_and_icon_ids() {
        assert_eq!(IDC_ARROW as usize, 32512);
        assert_eq!(IDC_IBEAM as usize, 32513);
        assert_eq!(IDC_HAND as usize, 32649);
        assert_eq!(IDI_APPLICATION as usize, 32512);
        assert_eq!(IDI_SHIELD as usize, 32518);
        assert_eq!(IDI_WARNING, IDI_EXCLAMATION);
        assert_eq!(IDI_ERROR, IDI_HAND);
        assert_eq!(IDI_INFORMATION, IDI_ASTERISK);
    }

    /// The ABI fixes the descriptor layout; 12 fields, pointer-aligned.
    #[test]
    #[cfg(target_pointer_width = "64")]
    fn wndclassexw_layout() {
        use std::mem::{align_of, size_of};
        assert_eq!(size_of::<WNDCLASSEXW>(), 80);
        assert_eq!(align_of::<WNDCLASSEXW>(), 8);
    }

    #[test]
    #[cfg(target_pointer_width = "32")]
    fn wndclassexw_layout() {
        assert_eq!(std::mem::size_of::<WNDCLASSEXW>(), 48);
    }
}
