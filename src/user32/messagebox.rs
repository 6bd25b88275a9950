// ── Message boxes ─────────────────────────────────────────────────────────────

use bitflags::bitflags;

use crate::ctypes::{DWORD, INT};
#[cfg(windows)]
use crate::ctypes::{HWND, LPCWSTR};

// ── Functions ─────────────────────────────────────────────────────────────────

#[cfg(windows)]
#[link(name = "user32", kind = "raw-dylib")]
extern "system" {
    /// Shows a modal message box and blocks until the user dismisses it.
    ///
    /// A null `hWnd` creates an ownerless dialog. Returns the `ID*` value
    /// of the pressed button, or 0 on failure.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-messageboxw
    pub fn MessageBoxW(
        hWnd: HWND,
        lpText: LPCWSTR,
        lpCaption: LPCWSTR,
        uType: MB,
    ) -> INT;
}

// ── Constants ─────────────────────────────────────────────────────────────────

bitflags! {
    /// `MB_*` — message-box style flags: one button set, optionally an
    /// icon, a default button, and a modality.
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct MB: DWORD {
        const OK                = 0x0000_0000;
        const OKCANCEL          = 0x0000_0001;
        const ABORTRETRYIGNORE  = 0x0000_0002;
        const YESNOCANCEL       = 0x0000_0003;
        const YESNO             = 0x0000_0004;
        const RETRYCANCEL       = 0x0000_0005;
        const CANCELTRYCONTINUE = 0x0000_0006;

        const ICONHAND          = 0x0000_0010;
        const ICONQUESTION      = 0x0000_0020;
        const ICONEXCLAMATION   = 0x0000_0030;
        const ICONASTERISK      = 0x0000_0040;
        const ICONERROR         = Self::ICONHAND.bits();
        const ICONSTOP          = Self::ICONHAND.bits();
        const ICONWARNING       = Self::ICONEXCLAMATION.bits();
        const ICONINFORMATION   = Self::ICONASTERISK.bits();

        const DEFBUTTON1        = 0x0000_0000;
        const DEFBUTTON2        = 0x0000_0100;
        const DEFBUTTON3        = 0x0000_0200;
        const DEFBUTTON4        = 0x0000_0300;

        const APPLMODAL         = 0x0000_0000;
        const SYSTEMMODAL       = 0x0000_1000;
        const TASKMODAL         = 0x0000_2000;

        const HELP              = 0x0000_4000;
        const SETFOREGROUND     = 0x0001_0000;
        const TOPMOST           = 0x0004_0000;
        const RIGHT             = 0x0008_0000;
        const RTLREADING        = 0x0010_0000;
    }
}

// ID* — button identifiers returned by MessageBoxW.
pub const IDOK: INT = 1;
pub const IDCANCEL: INT = 2;
pub const IDABORT: INT = 3;
pub const IDRETRY: INT = 4;
pub const IDIGNORE: INT = 5;
pub const IDYES: INT = 6;
pub const IDNO: INT = 7;
pub const IDCLOSE: INT = 8;
pub const IDHELP: INT = 9;
pub const IDTRYAGAIN: INT = 10;
pub const IDCONTINUE: INT = 11;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mb_button_sets() {
        assert_eq!(MB::OK.bits(), 0x0000);
        assert_eq!(MB::OKCANCEL.bits(), 0x0001);
        assert_eq!(MB::ABORTRETRYIGNORE.bits(), 0x0002);
        assert_eq!(MB::YESNOCANCEL.bits(), 0x0003);
        assert_eq!(MB::YESNO.bits(), 0x0004);
        assert_eq!(MB::RETRYCANCEL.bits(), 0x0005);
        assert_eq!(MB::CANCELTRYCONTINUE.bits(), 0x0006);
    }

    #[test]
    fn mb_icon_aliases() {
        assert_eq!(MB::ICONERROR, MB::ICONHAND);
        assert_eq!(MB::ICONSTOP, MB::ICONHAND);
        assert_eq!(MB::ICONWARNING, MB::ICONEXCLAMATION);
        assert_eq!(MB::ICONINFORMATION, MB::ICONASTERISK);
        assert_eq!(MB::ICONHAND.bits(), 0x0010);
        assert_eq!(MB::ICONQUESTION.bits(), 0x0020);
        assert_eq!(MB::ICONEXCLAMATION.bits(), 0x0030);
        assert_eq!(MB::ICONASTERISK.bits(), 0x0040);
    }

    #[test]
    fn mb_modality_and_extras() {
        assert_eq!(MB::SYSTEMMODAL.bits(), 0x1000);
        assert_eq!(MB::TASKMODAL.bits(), 0x2000);
        assert_eq!(MB::HELP.bits(), 0x4000);
        assert_eq!(MB::SETFOREGROUND.bits(), 0x0001_0000);
        assert_eq!(MB::TOPMOST.bits(), 0x0004_0000);
    }

    #[test]
    fn button_results_are_sequential() {
        assert_eq!(IDOK, 1);
        assert_eq!(IDCANCEL, 2);
        assert_eq!(IDYES, 6);
        assert_eq!(IDNO, 7);
        assert_eq!(IDCONTINUE, 11);
    }
}
