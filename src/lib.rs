//! Typed bindings to the Win32 windowing API.
//!
//! Direct `extern "system"` declarations against:
//!   user32.dll   — window creation, classes, menus, message processing
//!   kernel32.dll — module handles, last-error retrieval
//!   gdi32.dll    — stock objects
//!
//! The crate is purely declarative: branded handle types, constant families
//! with exact native values, and import blocks. Nothing is validated,
//! cached, or retried here; native return values pass through unchanged,
//! and a failed call is diagnosed the native way, via
//! [`kernel32::GetLastError`].
//!
//! # Safety
//!
//! Every imported function is `unsafe`. The caller is responsible for the
//! rules the OS itself imposes:
//! - pointers handed across the boundary must be valid (or null where the
//!   native signature documents null as meaningful);
//! - handles must be used on the thread that owns the window — these APIs
//!   inherit user32's thread-affinity rules, which this crate neither
//!   enforces nor relaxes;
//! - wide-string arguments must be null-terminated UTF-16 (see
//!   [`ctypes::wide`]).
//!
//! Types and constants are declared on every target; only the import blocks
//! and the functions that call them are compiled on Windows.

#![allow(non_snake_case)]
#![allow(non_camel_case_types)]
#![allow(clippy::upper_case_acronyms)]

pub mod ctypes;
pub mod gdi32;
pub mod kernel32;
pub mod user32;
