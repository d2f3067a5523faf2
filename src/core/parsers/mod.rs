//! File parsers for locale resource files.
//!
//! - `strings`: `.strings` key/value files (`"key" = "value";` per line)

pub mod strings;
