// ── Module handles ────────────────────────────────────────────────────────────

#[cfg(windows)]
use crate::ctypes::{HMODULE, LPCWSTR};

#[cfg(windows)]
#[link(name = "kernel32", kind = "raw-dylib")]
extern "system" {
    /// Retrieves a module handle for the named module, or for the calling
    /// process's own executable when `lpModuleName` is null.
    ///
    /// The returned handle is not reference-counted and must not be passed
    /// to `FreeLibrary`.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/libloaderapi/nf-libloaderapi-getmodulehandlew
    pub fn GetModuleHandleW(lpModuleName: LPCWSTR) -> HMODULE;
}
