// ── Window-message identifiers ────────────────────────────────────────────────
//
// Source of truth: winuser.h
// (https://learn.microsoft.com/en-us/windows/win32/winmsg/window-notifications)
// The full WM_* space used by the window-procedure contract, alphabetical.
// All message numbers below 0x0400 are reserved by the system; private
// messages start at WM_USER.

pub const WM_ACTIVATE: u32 = 0x0006;
pub const WM_ACTIVATEAPP: u32 = 0x001c;
pub const WM_AFXFIRST: u32 = 0x0360;
pub const WM_AFXLAST: u32 = 0x037f;
pub const WM_APP: u32 = 0x8000;
pub const WM_APPCOMMAND: u32 = 0x0319;
pub const WM_ASKCBFORMATNAME: u32 = 0x030c;
pub const WM_CANCELJOURNAL: u32 = 0x004b;
pub const WM_CANCELMODE: u32 = 0x001f;
pub const WM_CAPTURECHANGED: u32 = 0x0215;
pub const WM_CHANGECBCHAIN: u32 = 0x030d;
pub const WM_CHANGEUISTATE: u32 = 0x0127;
pub const WM_CHAR: u32 = 0x0102;
pub const WM_CHARTOITEM: u32 = 0x002f;
pub const WM_CHILDACTIVATE: u32 = 0x0022;
pub const WM_CLEAR: u32 = 0x0303;
pub const WM_CLIPBOARDUPDATE: u32 = 0x031d;
pub const WM_CLOSE: u32 = 0x0010;
pub const WM_COMMAND: u32 = 0x0111;
pub const WM_COMMNOTIFY: u32 = 0x0044;
pub const WM_COMPACTING: u32 = 0x0041;
pub const WM_COMPAREITEM: u32 = 0x0039;
pub const WM_CONTEXTMENU: u32 = 0x007b;
pub const WM_COPY: u32 = 0x0301;
pub const WM_COPYDATA: u32 = 0x004a;
pub const WM_CREATE: u32 = 0x0001;
pub const WM_CTLCOLORBTN: u32 = 0x0135;
pub const WM_CTLCOLORDLG: u32 = 0x0136;
pub const WM_CTLCOLOREDIT: u32 = 0x0133;
pub const WM_CTLCOLORLISTBOX: u32 = 0x0134;
pub const WM_CTLCOLORMSGBOX: u32 = 0x0132;
pub const WM_CTLCOLORSCROLLBAR: u32 = 0x0137;
pub const WM_CTLCOLORSTATIC: u32 = 0x0138;
pub const WM_CUT: u32 = 0x0300;
pub const WM_DEADCHAR: u32 = 0x0103;
pub const WM_DELETEITEM: u32 = 0x002d;
pub const WM_DESTROY: u32 = 0x0002;
pub const WM_DESTROYCLIPBOARD: u32 = 0x0307;
pub const WM_DEVICECHANGE: u32 = 0x0219;
pub const WM_DEVMODECHANGE: u32 = 0x001b;
pub const WM_DISPLAYCHANGE: u32 = 0x007e;
pub const WM_DPICHANGED: u32 = 0x02e0;
pub const WM_DPICHANGED_AFTERPARENT: u32 = 0x02e3;
pub const WM_DPICHANGED_BEFOREPARENT: u32 = 0x02e2;
pub const WM_DRAWCLIPBOARD: u32 = 0x0308;
pub const WM_DRAWITEM: u32 = 0x002b;
pub const WM_DROPFILES: u32 = 0x0233;
pub const WM_DWMCOLORIZATIONCOLORCHANGED: u32 = 0x0320;
pub const WM_DWMCOMPOSITIONCHANGED: u32 = 0x031e;
pub const WM_DWMNCRENDERINGCHANGED: u32 = 0x031f;
pub const WM_DWMSENDICONICLIVEPREVIEWBITMAP: u32 = 0x0326;
pub const WM_DWMSENDICONICTHUMBNAIL: u32 = 0x0323;
pub const WM_DWMWINDOWMAXIMIZEDCHANGE: u32 = 0x0321;
pub const WM_ENABLE: u32 = 0x000a;
pub const WM_ENDSESSION: u32 = 0x0016;
pub const WM_ENTERIDLE: u32 = 0x0121;
pub const WM_ENTERMENULOOP: u32 = 0x0211;
pub const WM_ENTERSIZEMOVE: u32 = 0x0231;
pub const WM_ERASEBKGND: u32 = 0x0014;
pub const WM_EXITMENULOOP: u32 = 0x0212;
pub const WM_EXITSIZEMOVE: u32 = 0x0232;
pub const WM_FONTCHANGE: u32 = 0x001d;
pub const WM_GESTURE: u32 = 0x0119;
pub const WM_GESTURENOTIFY: u32 = 0x011a;
pub const WM_GETDLGCODE: u32 = 0x0087;
pub const WM_GETDPISCALEDSIZE: u32 = 0x02e4;
pub const WM_GETFONT: u32 = 0x0031;
pub const WM_GETHMENU: u32 = 0x01e1;
pub const WM_GETHOTKEY: u32 = 0x0033;
pub const WM_GETICON: u32 = 0x007f;
pub const WM_GETMINMAXINFO: u32 = 0x0024;
pub const WM_GETOBJECT: u32 = 0x003d;
pub const WM_GETTEXT: u32 = 0x000d;
pub const WM_GETTEXTLENGTH: u32 = 0x000e;
pub const WM_GETTITLEBARINFOEX: u32 = 0x033f;
pub const WM_HANDHELDFIRST: u32 = 0x0358;
pub const WM_HANDHELDLAST: u32 = 0x035f;
pub const WM_HELP: u32 = 0x0053;
pub const WM_HOTKEY: u32 = 0x0312;
pub const WM_HSCROLL: u32 = 0x0114;
pub const WM_HSCROLLCLIPBOARD: u32 = 0x030e;
pub const WM_ICONERASEBKGND: u32 = 0x0027;
pub const WM_IME_CHAR: u32 = 0x0286;
pub const WM_IME_COMPOSITION: u32 = 0x010f;
pub const WM_IME_COMPOSITIONFULL: u32 = 0x0284;
pub const WM_IME_CONTROL: u32 = 0x0283;
pub const WM_IME_ENDCOMPOSITION: u32 = 0x010e;
pub const WM_IME_KEYDOWN: u32 = 0x0290;
pub const WM_IME_KEYLAST: u32 = 0x010f;
pub const WM_IME_KEYUP: u32 = 0x0291;
pub const WM_IME_NOTIFY: u32 = 0x0282;
pub const WM_IME_REQUEST: u32 = 0x0288;
pub const WM_IME_SELECT: u32 = 0x0285;
pub const WM_IME_SETCONTEXT: u32 = 0x0281;
pub const WM_IME_STARTCOMPOSITION: u32 = 0x010d;
pub const WM_INITDIALOG: u32 = 0x0110;
pub const WM_INITMENU: u32 = 0x0116;
pub const WM_INITMENUPOPUP: u32 = 0x0117;
pub const WM_INPUT: u32 = 0x00ff;
pub const WM_INPUT_DEVICE_CHANGE: u32 = 0x00fe;
pub const WM_INPUTLANGCHANGE: u32 = 0x0051;
pub const WM_INPUTLANGCHANGEREQUEST: u32 = 0x0050;
pub const WM_KEYDOWN: u32 = 0x0100;
pub const WM_KEYFIRST: u32 = 0x0100;
pub const WM_KEYLAST: u32 = 0x0109;
pub const WM_KEYUP: u32 = 0x0101;
pub const WM_KILLFOCUS: u32 = 0x0008;
pub const WM_LBUTTONDBLCLK: u32 = 0x0203;
pub const WM_LBUTTONDOWN: u32 = 0x0201;
pub const WM_LBUTTONUP: u32 = 0x0202;
pub const WM_MBUTTONDBLCLK: u32 = 0x0209;
pub const WM_MBUTTONDOWN: u32 = 0x0207;
pub const WM_MBUTTONUP: u32 = 0x0208;
pub const WM_MDIACTIVATE: u32 = 0x0222;
pub const WM_MDICASCADE: u32 = 0x0227;
pub const WM_MDICREATE: u32 = 0x0220;
pub const WM_MDIDESTROY: u32 = 0x0221;
pub const WM_MDIGETACTIVE: u32 = 0x0229;
pub const WM_MDIICONARRANGE: u32 = 0x0228;
pub const WM_MDIMAXIMIZE: u32 = 0x0225;
pub const WM_MDINEXT: u32 = 0x0224;
pub const WM_MDIREFRESHMENU: u32 = 0x0234;
pub const WM_MDIRESTORE: u32 = 0x0223;
pub const WM_MDISETMENU: u32 = 0x0230;
pub const WM_MDITILE: u32 = 0x0226;
pub const WM_MEASUREITEM: u32 = 0x002c;
pub const WM_MENUCHAR: u32 = 0x0120;
pub const WM_MENUCOMMAND: u32 = 0x0126;
pub const WM_MENUDRAG: u32 = 0x0123;
pub const WM_MENUGETOBJECT: u32 = 0x0124;
pub const WM_MENURBUTTONUP: u32 = 0x0122;
pub const WM_MENUSELECT: u32 = 0x011f;
pub const WM_MOUSEACTIVATE: u32 = 0x0021;
pub const WM_MOUSEFIRST: u32 = 0x0200;
pub const WM_MOUSEHOVER: u32 = 0x02a1;
pub const WM_MOUSEHWHEEL: u32 = 0x020e;
pub const WM_MOUSELAST: u32 = 0x020e;
pub const WM_MOUSELEAVE: u32 = 0x02a3;
pub const WM_MOUSEMOVE: u32 = 0x0200;
pub const WM_MOUSEWHEEL: u32 = 0x020a;
pub const WM_MOVE: u32 = 0x0003;
pub const WM_MOVING: u32 = 0x0216;
pub const WM_NCACTIVATE: u32 = 0x0086;
pub const WM_NCCALCSIZE: u32 = 0x0083;
pub const WM_NCCREATE: u32 = 0x0081;
pub const WM_NCDESTROY: u32 = 0x0082;
pub const WM_NCHITTEST: u32 = 0x0084;
pub const WM_NCLBUTTONDBLCLK: u32 = 0x00a3;
pub const WM_NCLBUTTONDOWN: u32 = 0x00a1;
pub const WM_NCLBUTTONUP: u32 = 0x00a2;
pub const WM_NCMBUTTONDBLCLK: u32 = 0x00a9;
pub const WM_NCMBUTTONDOWN: u32 = 0x00a7;
pub const WM_NCMBUTTONUP: u32 = 0x00a8;
pub const WM_NCMOUSEHOVER: u32 = 0x02a0;
pub const WM_NCMOUSELEAVE: u32 = 0x02a2;
pub const WM_NCMOUSEMOVE: u32 = 0x00a0;
pub const WM_NCPAINT: u32 = 0x0085;
pub const WM_NCPOINTERDOWN: u32 = 0x0242;
pub const WM_NCPOINTERUP: u32 = 0x0243;
pub const WM_NCPOINTERUPDATE: u32 = 0x0241;
pub const WM_NCRBUTTONDBLCLK: u32 = 0x00a6;
pub const WM_NCRBUTTONDOWN: u32 = 0x00a4;
pub const WM_NCRBUTTONUP: u32 = 0x00a5;
pub const WM_NCXBUTTONDBLCLK: u32 = 0x00ad;
pub const WM_NCXBUTTONDOWN: u32 = 0x00ab;
pub const WM_NCXBUTTONUP: u32 = 0x00ac;
pub const WM_NEXTDLGCTL: u32 = 0x0028;
pub const WM_NEXTMENU: u32 = 0x0213;
pub const WM_NOTIFY: u32 = 0x004e;
pub const WM_NOTIFYFORMAT: u32 = 0x0055;
pub const WM_NULL: u32 = 0x0000;
pub const WM_PAINT: u32 = 0x000f;
pub const WM_PAINTCLIPBOARD: u32 = 0x0309;
pub const WM_PAINTICON: u32 = 0x0026;
pub const WM_PALETTECHANGED: u32 = 0x0311;
pub const WM_PALETTEISCHANGING: u32 = 0x0310;
pub const WM_PARENTNOTIFY: u32 = 0x0210;
pub const WM_PASTE: u32 = 0x0302;
pub const WM_PENWINFIRST: u32 = 0x0380;
pub const WM_PENWINLAST: u32 = 0x038f;
pub const WM_POINTERACTIVATE: u32 = 0x024b;
pub const WM_POINTERCAPTURECHANGED: u32 = 0x024c;
pub const WM_POINTERDEVICECHANGE: u32 = 0x0238;
pub const WM_POINTERDEVICEINRANGE: u32 = 0x0239;
pub const WM_POINTERDEVICEOUTOFRANGE: u32 = 0x023a;
pub const WM_POINTERDOWN: u32 = 0x0246;
pub const WM_POINTERENTER: u32 = 0x0249;
pub const WM_POINTERHITTEST: u32 = 0x0250;
pub const WM_POINTERHWHEEL: u32 = 0x024f;
pub const WM_POINTERLEAVE: u32 = 0x024a;
pub const WM_POINTERROUTEDAWAY: u32 = 0x0252;
pub const WM_POINTERROUTEDRELEASED: u32 = 0x0253;
pub const WM_POINTERROUTEDTO: u32 = 0x0251;
pub const WM_POINTERUP: u32 = 0x0247;
pub const WM_POINTERUPDATE: u32 = 0x0245;
pub const WM_POINTERWHEEL: u32 = 0x024e;
pub const WM_POWER: u32 = 0x0048;
pub const WM_POWERBROADCAST: u32 = 0x0218;
pub const WM_PRINT: u32 = 0x0317;
pub const WM_PRINTCLIENT: u32 = 0x0318;
pub const WM_QUERYDRAGICON: u32 = 0x0037;
pub const WM_QUERYENDSESSION: u32 = 0x0011;
pub const WM_QUERYNEWPALETTE: u32 = 0x030f;
pub const WM_QUERYOPEN: u32 = 0x0013;
pub const WM_QUERYUISTATE: u32 = 0x0129;
pub const WM_QUEUESYNC: u32 = 0x0023;
pub const WM_QUIT: u32 = 0x0012;
pub const WM_RBUTTONDBLCLK: u32 = 0x0206;
pub const WM_RBUTTONDOWN: u32 = 0x0204;
pub const WM_RBUTTONUP: u32 = 0x0205;
pub const WM_RENDERALLFORMATS: u32 = 0x0306;
pub const WM_RENDERFORMAT: u32 = 0x0305;
pub const WM_SETCURSOR: u32 = 0x0020;
pub const WM_SETFOCUS: u32 = 0x0007;
pub const WM_SETFONT: u32 = 0x0030;
pub const WM_SETHOTKEY: u32 = 0x0032;
pub const WM_SETICON: u32 = 0x0080;
pub const WM_SETREDRAW: u32 = 0x000b;
pub const WM_SETTEXT: u32 = 0x000c;
/// Alias kept by the headers for source compatibility.
pub const WM_SETTINGCHANGE: u32 = WM_WININICHANGE;
pub const WM_SHOWWINDOW: u32 = 0x0018;
pub const WM_SIZE: u32 = 0x0005;
pub const WM_SIZECLIPBOARD: u32 = 0x030b;
pub const WM_SIZING: u32 = 0x0214;
pub const WM_SPOOLERSTATUS: u32 = 0x002a;
pub const WM_STYLECHANGED: u32 = 0x007d;
pub const WM_STYLECHANGING: u32 = 0x007c;
pub const WM_SYNCPAINT: u32 = 0x0088;
pub const WM_SYSCHAR: u32 = 0x0106;
pub const WM_SYSCOLORCHANGE: u32 = 0x0015;
pub const WM_SYSCOMMAND: u32 = 0x0112;
pub const WM_SYSDEADCHAR: u32 = 0x0107;
pub const WM_SYSKEYDOWN: u32 = 0x0104;
pub const WM_SYSKEYUP: u32 = 0x0105;
pub const WM_TABLET_FIRST: u32 = 0x02c0;
pub const WM_TABLET_LAST: u32 = 0x02df;
pub const WM_TCARD: u32 = 0x0052;
pub const WM_THEMECHANGED: u32 = 0x031a;
pub const WM_TIMECHANGE: u32 = 0x001e;
pub const WM_TIMER: u32 = 0x0113;
pub const WM_TOUCH: u32 = 0x0240;
pub const WM_TOUCHHITTESTING: u32 = 0x024d;
pub const WM_UNDO: u32 = 0x0304;
pub const WM_UNICHAR: u32 = 0x0109;
pub const WM_UNINITMENUPOPUP: u32 = 0x0125;
pub const WM_UPDATEUISTATE: u32 = 0x0128;
pub const WM_USER: u32 = 0x0400;
pub const WM_USERCHANGED: u32 = 0x0054;
pub const WM_VKEYTOITEM: u32 = 0x002e;
pub const WM_VSCROLL: u32 = 0x0115;
pub const WM_VSCROLLCLIPBOARD: u32 = 0x030a;
pub const WM_WINDOWPOSCHANGED: u32 = 0x0047;
pub const WM_WINDOWPOSCHANGING: u32 = 0x0046;
pub const WM_WININICHANGE: u32 = 0x001a;
pub const WM_WTSSESSION_CHANGE: u32 = 0x02b1;
pub const WM_XBUTTONDBLCLK: u32 = 0x020d;
pub const WM_XBUTTONDOWN: u32 = 0x020b;
pub const WM_XBUTTONUP: u32 = 0x020c;

/// Returned from a `WM_UNICHAR` handler to report that the window processes
/// that message (not itself a message identifier).
pub const UNICODE_NOCHAR: u32 = 0xffff;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // Lifecycle identifiers every window procedure dispatches on.
    #[test]
    fn lifecycle_messages() {
        assert_eq!(WM_NULL, 0x0000);
        assert_eq!(WM_CREATE, 0x0001);
        assert_eq!(WM_DESTROY, 0x0002);
        assert_eq!(WM_CLOSE, 0x0010);
        assert_eq!(WM_QUIT, 0x0012);
        assert_eq!(WM_SHOWWINDOW, 0x0018);
        assert_eq!(WM_SIZE, 0x0005);
        assert_eq!(WM_PAINT, 0x000f);
        assert_eq!(WM_COMMAND, 0x0111);
        assert_eq!(WM_ACTIVATE, 0x0006);
    }

    #[test]
    fn range_markers_bracket_their_families() {
        assert_eq!(WM_KEYFIRST, WM_KEYDOWN);
        assert_eq!(WM_KEYLAST, WM_UNICHAR);
        assert_eq!(WM_MOUSEFIRST, WM_MOUSEMOVE);
        assert_eq!(WM_MOUSELAST, WM_MOUSEHWHEEL);
        assert!(WM_AFXFIRST < WM_AFXLAST);
        assert!(WM_HANDHELDFIRST < WM_HANDHELDLAST);
        assert!(WM_PENWINFIRST < WM_PENWINLAST);
        assert!(WM_TABLET_FIRST < WM_TABLET_LAST);
    }

    #[test]
    fn header_aliases() {
        assert_eq!(WM_SETTINGCHANGE, WM_WININICHANGE);
        assert_eq!(WM_IME_KEYLAST, WM_IME_COMPOSITION);
    }

    #[test]
    fn reserved_boundary() {
        // Everything below WM_USER is reserved by the system; WM_APP opens
        // the application-private range.
        assert_eq!(WM_USER, 0x0400);
        assert_eq!(WM_APP, 0x8000);
        assert!(WM_GETTITLEBARINFOEX < WM_USER);
    }

    #[test]
    fn input_messages() {
        assert_eq!(WM_KEYDOWN, 0x0100);
        assert_eq!(WM_KEYUP, 0x0101);
        assert_eq!(WM_CHAR, 0x0102);
        assert_eq!(WM_SYSKEYDOWN, 0x0104);
        assert_eq!(WM_MOUSEMOVE, 0x0200);
        assert_eq!(WM_LBUTTONDOWN, 0x0201);
        assert_eq!(WM_LBUTTONUP, 0x0202);
        assert_eq!(WM_MOUSEWHEEL, 0x020a);
        assert_eq!(WM_XBUTTONDOWN, 0x020b);
    }

    #[test]
    fn clipboard_messages() {
        assert_eq!(WM_CUT, 0x0300);
        assert_eq!(WM_COPY, 0x0301);
        assert_eq!(WM_PASTE, 0x0302);
        assert_eq!(WM_CLEAR, 0x0303);
        assert_eq!(WM_UNDO, 0x0304);
    }
}
