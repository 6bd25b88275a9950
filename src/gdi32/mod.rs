// ── gdi32.dll ─────────────────────────────────────────────────────────────────
//
// The one GDI entry point window registration needs: stock objects, used
// for the class background brush.

use crate::ctypes::INT;
#[cfg(windows)]
use crate::ctypes::HGDIOBJ;

// Stock object identifiers accepted by `GetStockObject`.
pub const WHITE_BRUSH: INT = 0;
pub const LTGRAY_BRUSH: INT = 1;
pub const GRAY_BRUSH: INT = 2;
pub const DKGRAY_BRUSH: INT = 3;
pub const BLACK_BRUSH: INT = 4;
pub const NULL_BRUSH: INT = 5;
pub const HOLLOW_BRUSH: INT = NULL_BRUSH;

#[cfg(windows)]
#[link(name = "gdi32", kind = "raw-dylib")]
extern "system" {
    /// Retrieves one of the predefined stock pens, brushes, or fonts.
    ///
    /// Stock objects are process-global; the returned handle must not be
    /// deleted. Returns a null `HGDIOBJ` for an unknown identifier.
    ///
    /// https://learn.microsoft.com/en-us/windows/win32/api/wingdi/nf-wingdi-getstockobject
    pub fn GetStockObject(i: INT) -> HGDIOBJ;
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_brush_ids() {
        assert_eq!(WHITE_BRUSH, 0);
        assert_eq!(BLACK_BRUSH, 4);
        assert_eq!(HOLLOW_BRUSH, NULL_BRUSH);
    }
}
