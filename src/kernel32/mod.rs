// ── kernel32.dll ──────────────────────────────────────────────────────────────
//
// Bindings against kernel32: the last-error query every user32 failure path
// funnels into, and module-handle retrieval for the `HINSTANCE` that window
// creation requires.

mod error;
mod module;

pub use error::*;
pub use module::*;
