//! Rule implementations for strings-check.
//!
//! Rules are pure functions over already-extracted data. Duplicate keys are
//! found while extracting a file (see `core::parsers::strings`), so the only
//! cross-file rule lives here.
//!
//! - `missing_key`: keys defined by some locales but not by others

pub mod missing_key;

pub use missing_key::check_missing_keys;
