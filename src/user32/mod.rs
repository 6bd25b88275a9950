// ── user32.dll ────────────────────────────────────────────────────────────────
//
// The windowing surface proper, one file per API group:
//   window     — creation, visibility, the default window procedure
//   class      — window-class registration and its resources
//   message    — retrieval and dispatch (the loop half of the WNDPROC contract)
//   messages   — the WM_* identifier table
//   menu       — menu-bar construction
//   messagebox — modal message boxes

mod class;
mod menu;
mod message;
mod messagebox;
mod messages;
mod window;

pub use class::*;
pub use menu::*;
pub use message::*;
pub use messagebox::*;
pub use messages::*;
pub use window::*;
