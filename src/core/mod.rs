//! Terminal core: everything that runs without a browser.
//!
//! The virtual filesystem, command interpreter, line editor, and completion
//! engine live here. Browser capabilities enter only through the traits in
//! [`host`], so the whole module is testable natively.

pub mod autocomplete;
pub mod commands;
pub mod content;
pub mod editor;
pub mod error;
pub mod filesystem;
pub mod host;
pub mod path;
