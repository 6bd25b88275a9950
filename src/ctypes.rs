// ── Shared Win32 primitive types ──────────────────────────────────────────────
//
// The C-level vocabulary every binding module builds on: fixed-width integer
// aliases under their Win32 names, branded handle newtypes, and the
// machine-word message parameters of the window-procedure contract.
//
// Handles are opaque tokens owned by the OS. This crate never allocates,
// frees, caches, or dereferences them; it only moves them across the ABI
// boundary with the right brand so that, say, an `HMENU` cannot be passed
// where an `HWND` is expected.

use std::ffi::c_void;

// ── Integer aliases ───────────────────────────────────────────────────────────

pub type BOOL = i32;
pub type BYTE = u8;
pub type WORD = u16;
pub type DWORD = u32;
pub type INT = i32;
pub type UINT = u32;
pub type LONG = i32;

/// Class atom returned by `RegisterClassExW`; 0 signals failure.
pub type ATOM = u16;

pub type LPVOID = *mut c_void;

/// Null-terminated UTF-16 string, read-only.
pub type LPCWSTR = *const u16;
/// Null-terminated UTF-16 string, writable.
pub type LPWSTR = *mut u16;

pub const FALSE: BOOL = 0;
pub const TRUE: BOOL = 1;

// ── Handle types ──────────────────────────────────────────────────────────────

// Each handle is a distinct #[repr(transparent)] wrapper over the raw
// pointer, so the brand exists only at compile time and the ABI stays that
// of a plain pointer-sized value.
macro_rules! declare_handle {
    ($(#[doc = $doc:expr] $name:ident,)*) => {$(
        #[doc = $doc]
        #[repr(transparent)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name(pub *mut c_void);

        impl $name {
            /// The null handle, the failure sentinel of most creation calls.
            pub const fn null() -> Self {
                Self(std::ptr::null_mut())
            }

            pub fn is_null(self) -> bool {
                self.0.is_null()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::null()
            }
        }
    )*};
}

declare_handle! {
    #[doc = "Window handle."]
    HWND,
    #[doc = "Instance handle identifying the module that owns a window class."]
    HINSTANCE,
    #[doc = "Module handle, as returned by `GetModuleHandleW`."]
    HMODULE,
    #[doc = "Menu handle."]
    HMENU,
    #[doc = "Icon handle."]
    HICON,
    #[doc = "Cursor handle."]
    HCURSOR,
    #[doc = "Brush handle."]
    HBRUSH,
    #[doc = "Generic GDI object handle, as returned by `GetStockObject`."]
    HGDIOBJ,
}

// HINSTANCE and HMODULE are the same underlying value on Windows (guaranteed
// by the Win32 ABI); re-branding is lossless in both directions.
impl From<HMODULE> for HINSTANCE {
    fn from(h: HMODULE) -> Self {
        Self(h.0)
    }
}

impl From<HINSTANCE> for HMODULE {
    fn from(h: HINSTANCE) -> Self {
        Self(h.0)
    }
}

// ── Message parameters ────────────────────────────────────────────────────────

/// First message parameter: unsigned machine word.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WPARAM(pub usize);

/// Second message parameter: signed machine word.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LPARAM(pub isize);

/// Window-procedure result: signed machine word.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LRESULT(pub isize);

// ── Structures ────────────────────────────────────────────────────────────────

/// Screen position in device pixels (the `pt` field of `MSG`).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct POINT {
    pub x: LONG,
    pub y: LONG,
}

// ── Wide strings ──────────────────────────────────────────────────────────────

/// Convert a Rust string to a null-terminated UTF-16 buffer for `LPCWSTR`
/// parameters.
///
/// The buffer must outlive the native call that reads it:
///
/// ```
/// let title = winlite::ctypes::wide("hello");
/// let ptr: winlite::ctypes::LPCWSTR = title.as_ptr();
/// # let _ = ptr;
/// ```
pub fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_values() {
        assert_eq!(FALSE, 0);
        assert_eq!(TRUE, 1);
    }

    #[test]
    fn handles_default_to_null() {
        assert!(HWND::default().is_null());
        assert!(HMENU::null().is_null());
        assert_eq!(HWND::default(), HWND::null());
    }

    #[test]
    fn handles_are_pointer_sized() {
        assert_eq!(
            std::mem::size_of::<HWND>(),
            std::mem::size_of::<*mut c_void>()
        );
        assert_eq!(
            std::mem::size_of::<LRESULT>(),
            std::mem::size_of::<isize>()
        );
    }

    #[test]
    fn module_instance_rebrand_is_lossless() {
        let module = HMODULE(0x1234 as *mut c_void);
        let instance = HINSTANCE::from(module);
        assert_eq!(HMODULE::from(instance), module);
    }

    #[test]
    fn point_layout() {
        assert_eq!(std::mem::size_of::<POINT>(), 8);
    }

    #[test]
    fn wide_appends_terminator() {
        let w = wide("Hi");
        assert_eq!(w, vec![b'H' as u16, b'i' as u16, 0]);
    }

    #[test]
    fn wide_empty_is_just_terminator() {
        assert_eq!(wide(""), vec![0]);
    }

    #[test]
    fn wide_handles_non_bmp() {
        // '𝄞' (U+1D11E) encodes as a surrogate pair.
        let w = wide("𝄞");
        assert_eq!(w, vec![0xD834, 0xDD1E, 0]);
    }
}
