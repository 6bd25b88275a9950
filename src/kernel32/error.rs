// ── Last-error retrieval ──────────────────────────────────────────────────────

#[cfg(windows)]
use crate::ctypes::DWORD;

#[cfg(windows)]
#[link(name = "kernel32", kind = "raw-dylib")]
extern "system" {
    /// Retrieves the calling thread's last-error code value.
    ///
    /// The value is thread-local and overwritten by almost every API call;
    /// read it immediately after the call that signalled failure.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/errhandlingapi/nf-errhandlingapi-getlasterror
    pub fn GetLastError() -> DWORD;

    /// Sets the calling thread's last-error code value.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/errhandlingapi/nf-errhandlingapi-setlasterror
    pub fn SetLastError(dwErrCode: DWORD);
}
