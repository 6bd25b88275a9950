// ── hello-window ──────────────────────────────────────────────────────────────
//
// Minimal consumer of the winlite bindings: register a window class, create
// the window with a small menu bar, and drive the message loop until the
// user closes it. Win32-only by nature; other targets get a stub main so
// the crate as a whole stays buildable everywhere.

// Release builds run as a GUI application (no console window).
// Debug builds keep the console so the timing eprintln! below is visible.
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(windows)]
mod app {
    use winlite::ctypes::{wide, HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};
    use winlite::gdi32::{GetStockObject, WHITE_BRUSH};
    use winlite::kernel32::{GetLastError, GetModuleHandleW};
    use winlite::user32::{
        AppendMenuW, CreateMenu, CreateWindowW, DefWindowProcW, DestroyWindow,
        DispatchMessageW, GetMessageW, LoadCursorW, LoadIconW, MessageBoxW,
        PostQuitMessage, RegisterClassExW, SetMenu, ShowWindow, TranslateMessage,
        UpdateWindow, CS, CW_USEDEFAULT, IDC_ARROW, IDI_APPLICATION, MB, MF, MSG,
        SW_SHOW, WM_CLOSE, WM_COMMAND, WM_DESTROY, WNDCLASSEXW, WS,
    };

    // ── Window identity ───────────────────────────────────────────────────────

    const CLASS_NAME: &str = "WinliteHelloWindow";
    const APP_TITLE: &str = "Hello, winlite";

    const DEFAULT_WIDTH: i32 = 640;
    const DEFAULT_HEIGHT: i32 = 480;

    // ── Menu command IDs ──────────────────────────────────────────────────────

    const IDM_FILE_EXIT: usize = 1001;
    const IDM_HELP_ABOUT: usize = 9001;

    // ── Errors ────────────────────────────────────────────────────────────────

    /// Everything this demo can fail on: a Win32 call that signalled
    /// failure, identified by name and last-error code.
    #[derive(Debug)]
    pub struct Win32Error {
        function: &'static str,
        code: u32,
    }

    impl std::fmt::Display for Win32Error {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            let Self { function, code } = self;
            write!(f, "{function} failed (error {code:#010x})")
        }
    }

    impl std::error::Error for Win32Error {}

    type Result<T> = std::result::Result<T, Win32Error>;

    /// Capture the current last-error code for a failed call.
    ///
    /// Call immediately after the function that signalled failure — the
    /// code is thread-local state that the next API call can overwrite.
    fn last_error(function: &'static str) -> Win32Error {
        // SAFETY: GetLastError reads thread-local state and never fails.
        let code = unsafe { GetLastError() };
        Win32Error { function, code }
    }

    // ── Entry ─────────────────────────────────────────────────────────────────

    /// Register the class, create the window, and run the message loop
    /// until the user closes the application.
    pub fn run() -> Result<()> {
        #[cfg(debug_assertions)]
        let t0 = std::time::Instant::now();

        // SAFETY: a null module name returns the .exe's own handle, which
        // is valid for the process lifetime.
        let hmodule = unsafe { GetModuleHandleW(std::ptr::null()) };
        if hmodule.is_null() {
            return Err(last_error("GetModuleHandleW"));
        }
        let hinstance = HINSTANCE::from(hmodule);

        let class_name = wide(CLASS_NAME);

        register_class(hinstance, class_name.as_ptr())?;
        let hwnd = create_window(hinstance, class_name.as_ptr())?;

        // SAFETY: hwnd was just returned by CreateWindowW and is valid.
        // ShowWindow returns the previous visibility state and UpdateWindow
        // a success BOOL; both are intentionally ignored.
        unsafe {
            let _ = ShowWindow(hwnd, SW_SHOW);
            let _ = UpdateWindow(hwnd);
        }

        #[cfg(debug_assertions)]
        eprintln!(
            "[hello-window] window visible in {:.1} ms",
            t0.elapsed().as_secs_f64() * 1000.0
        );

        message_loop()
    }

    /// Show a modal error dialog; the only safe output path once the
    /// console is gone.
    pub fn show_error_dialog(message: &str) {
        let text = wide(message);
        let caption = wide("hello-window — fatal error");

        // SAFETY: both buffers are null-terminated and outlive the call; a
        // null owner HWND makes the dialog ownerless.
        unsafe {
            let _ = MessageBoxW(
                HWND::null(),
                text.as_ptr(),
                caption.as_ptr(),
                MB::OK | MB::ICONERROR,
            );
        }
    }

    // ── Window class registration ─────────────────────────────────────────────

    fn register_class(hinstance: HINSTANCE, class_name: *const u16) -> Result<()> {
        // SAFETY: the IDC_ARROW / IDI_APPLICATION resources are built into
        // every Windows version; loading them from a null instance succeeds.
        let icon = unsafe { LoadIconW(HINSTANCE::null(), IDI_APPLICATION) };
        let cursor = unsafe { LoadCursorW(HINSTANCE::null(), IDC_ARROW) };

        // SAFETY: stock objects are process-global and WHITE_BRUSH always
        // exists; the handle re-brands to HBRUSH losslessly.
        let background = unsafe { GetStockObject(WHITE_BRUSH) };

        let wndclass = WNDCLASSEXW {
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            style: CS::HREDRAW | CS::VREDRAW,
            lpfnWndProc: Some(wnd_proc),
            cbClsExtra: 0,
            cbWndExtra: 0,
            hInstance: hinstance,
            hIcon: icon,
            hCursor: cursor,
            hbrBackground: winlite::ctypes::HBRUSH(background.0),
            lpszMenuName: std::ptr::null(),
            lpszClassName: class_name,
            hIconSm: icon,
        };

        // SAFETY: wndclass is fully initialised and class_name points to a
        // null-terminated UTF-16 string owned by the caller.
        let atom = unsafe { RegisterClassExW(&wndclass) };
        if atom == 0 {
            return Err(last_error("RegisterClassExW"));
        }

        Ok(())
    }

    // ── Window creation ───────────────────────────────────────────────────────

    fn create_window(hinstance: HINSTANCE, class_name: *const u16) -> Result<HWND> {
        let title = wide(APP_TITLE);

        // SAFETY: class_name was just registered; null parent and menu
        // create a top-level window with no menu attached yet; lpParam is
        // null because no creation data is needed.
        let hwnd = unsafe {
            CreateWindowW(
                class_name,
                title.as_ptr(),
                WS::OVERLAPPEDWINDOW,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                DEFAULT_WIDTH,
                DEFAULT_HEIGHT,
                HWND::null(),
                winlite::ctypes::HMENU::null(),
                hinstance,
                std::ptr::null_mut(),
            )
        };

        if hwnd.is_null() {
            return Err(last_error("CreateWindowW"));
        }

        let menu = build_menu()?;
        // SAFETY: hwnd and menu are valid handles; the window takes
        // ownership of the menu bar.
        let ok = unsafe { SetMenu(hwnd, menu) };
        if ok == 0 {
            return Err(last_error("SetMenu"));
        }

        Ok(hwnd)
    }

    // ── Menu construction ─────────────────────────────────────────────────────

    fn build_menu() -> Result<winlite::ctypes::HMENU> {
        let exit_label = wide("E&xit\tAlt+F4");
        let about_label = wide("&About…");
        let file_label = wide("&File");
        let help_label = wide("&Help");

        // SAFETY: CreateMenu has no preconditions; AppendMenuW only reads
        // the labels for the duration of each call. For MF::POPUP items the
        // uIDNewItem parameter is the child HMENU cast to usize.
        unsafe {
            let bar = CreateMenu();
            let file = CreateMenu();
            let help = CreateMenu();
            if bar.is_null() || file.is_null() || help.is_null() {
                return Err(last_error("CreateMenu"));
            }

            if AppendMenuW(file, MF::STRING, IDM_FILE_EXIT, exit_label.as_ptr()) == 0
                || AppendMenuW(help, MF::STRING, IDM_HELP_ABOUT, about_label.as_ptr()) == 0
                || AppendMenuW(bar, MF::POPUP, file.0 as usize, file_label.as_ptr()) == 0
                || AppendMenuW(bar, MF::POPUP, help.0 as usize, help_label.as_ptr()) == 0
            {
                return Err(last_error("AppendMenuW"));
            }

            Ok(bar)
        }
    }

    // ── Message loop ──────────────────────────────────────────────────────────

    fn message_loop() -> Result<()> {
        let mut msg = MSG::default();

        loop {
            // SAFETY: &mut msg is a valid MSG pointer; a null HWND
            // retrieves messages for all windows on this thread; the 0,0
            // filter accepts every message.
            let ret = unsafe { GetMessageW(&mut msg, HWND::null(), 0, 0) };

            match ret {
                // GetMessageW returns -1 on error.
                -1 => return Err(last_error("GetMessageW")),
                // 0 means WM_QUIT was retrieved — exit cleanly.
                0 => break,
                _ => unsafe {
                    // SAFETY: msg was populated by a successful GetMessageW.
                    let _ = TranslateMessage(&msg);
                    let _ = DispatchMessageW(&msg);
                },
            }
        }

        Ok(())
    }

    // ── Window procedure ──────────────────────────────────────────────────────

    // SAFETY: registered as lpfnWndProc; user32 guarantees the parameters
    // are valid for the duration of each call.
    unsafe extern "system" fn wnd_proc(
        hwnd: HWND,
        msg: u32,
        wparam: WPARAM,
        lparam: LPARAM,
    ) -> LRESULT {
        match msg {
            WM_CLOSE => {
                // SAFETY: hwnd is the window being closed; DestroyWindow
                // triggers WM_DESTROY below.
                let _ = DestroyWindow(hwnd);
                LRESULT(0)
            }

            WM_DESTROY => {
                // SAFETY: posts WM_QUIT to this thread's queue, ending the
                // message loop.
                PostQuitMessage(0);
                LRESULT(0)
            }

            WM_COMMAND => {
                // Low word of WPARAM is the command identifier.
                match wparam.0 & 0xFFFF {
                    IDM_FILE_EXIT => {
                        let _ = DestroyWindow(hwnd);
                        LRESULT(0)
                    }
                    IDM_HELP_ABOUT => {
                        about_dialog(hwnd);
                        LRESULT(0)
                    }
                    _ => DefWindowProcW(hwnd, msg, wparam, lparam),
                }
            }

            // Default processing for everything else.
            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }

    fn about_dialog(hwnd: HWND) {
        let text = wide(concat!(
            "hello-window\n\n",
            "Demo consumer for the winlite Win32 bindings.",
        ));
        let caption = wide("About");

        // SAFETY: buffers outlive the call; hwnd owns the modal dialog for
        // the duration of this message.
        unsafe {
            let _ = MessageBoxW(hwnd, text.as_ptr(), caption.as_ptr(), MB::OK);
        }
    }
}

#[cfg(windows)]
fn main() {
    if let Err(e) = app::run() {
        app::show_error_dialog(&e.to_string());
        std::process::exit(1);
    }
}

#[cfg(not(windows))]
fn main() {
    eprintln!("hello-window drives the Win32 API and only runs on Windows.");
}
