// ── Menus ─────────────────────────────────────────────────────────────────────

use bitflags::bitflags;

use crate::ctypes::DWORD;
#[cfg(windows)]
use crate::ctypes::{BOOL, HMENU, HWND, LPCWSTR};

// ── Functions ─────────────────────────────────────────────────────────────────

#[cfg(windows)]
#[link(name = "user32", kind = "raw-dylib")]
extern "system" {
    /// Creates an empty menu, to be populated with `AppendMenuW`.
    ///
    /// Menus that are never assigned to a window must be freed with
    /// `DestroyMenu`.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-createmenu
    pub fn CreateMenu() -> HMENU;

    /// Creates an empty drop-down, submenu, or shortcut menu.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-createpopupmenu
    pub fn CreatePopupMenu() -> HMENU;

    /// Appends an item to the end of a menu.
    ///
    /// For `MF::POPUP` items, `uIDNewItem` carries the submenu's `HMENU`
    /// cast to `usize`; otherwise it is the command identifier delivered in
    /// `WM_COMMAND`. `lpNewItem` may be null for separators.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-appendmenuw
    pub fn AppendMenuW(
        hMenu: HMENU,
        uFlags: MF,
        uIDNewItem: usize,
        lpNewItem: LPCWSTR,
    ) -> BOOL;

    /// Assigns a menu bar to a window (or removes it when `hMenu` is null).
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-setmenu
    pub fn SetMenu(hWnd: HWND, hMenu: HMENU) -> BOOL;

    /// Destroys a menu and frees its memory. Menus assigned to a window are
    /// destroyed with it and must not be destroyed twice.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-destroymenu
    pub fn DestroyMenu(hMenu: HMENU) -> BOOL;
}

// ── Constants ─────────────────────────────────────────────────────────────────

bitflags! {
    /// `MF_*` — menu-item flags for `AppendMenuW`.
    ///
    /// `STRING`, `ENABLED`, and `BYCOMMAND` are the zero defaults the
    /// headers define for readable call sites.
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct MF: DWORD {
        const BYCOMMAND    = 0x0000;
        const ENABLED      = 0x0000;
        const STRING       = 0x0000;
        const GRAYED       = 0x0001;
        const DISABLED     = 0x0002;
        const BITMAP       = 0x0004;
        const CHECKED      = 0x0008;
        const POPUP        = 0x0010;
        const MENUBARBREAK = 0x0020;
        const MENUBREAK    = 0x0040;
        const HILITE       = 0x0080;
        const OWNERDRAW    = 0x0100;
        const BYPOSITION   = 0x0400;
        const SEPARATOR    = 0x0800;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mf_values() {
        assert_eq!(MF::STRING.bits(), 0x0000);
        assert_eq!(MF::GRAYED.bits(), 0x0001);
        assert_eq!(MF::DISABLED.bits(), 0x0002);
        assert_eq!(MF::BITMAP.bits(), 0x0004);
        assert_eq!(MF::CHECKED.bits(), 0x0008);
        assert_eq!(MF::POPUP.bits(), 0x0010);
        assert_eq!(MF::MENUBARBREAK.bits(), 0x0020);
        assert_eq!(MF::MENUBREAK.bits(), 0x0040);
        assert_eq!(MF::HILITE.bits(), 0x0080);
        assert_eq!(MF::OWNERDRAW.bits(), 0x0100);
        assert_eq!(MF::BYPOSITION.bits(), 0x0400);
        assert_eq!(MF::SEPARATOR.bits(), 0x0800);
    }

    #[test]
    fn mf_zero_defaults_combine_silently() {
        // MF_STRING | MF_GRAYED must be indistinguishable from MF_GRAYED on
        // the wire, as the headers intend.
        assert_eq!((MF::STRING | MF::GRAYED).bits(), MF::GRAYED.bits());
        assert_eq!(MF::BYCOMMAND.bits(), 0);
        assert_eq!(MF::ENABLED.bits(), 0);
    }
}
