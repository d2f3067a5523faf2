//! strings-check - consistency checker for localized `.strings` files
//!
//! Given a directory of locale directories (`en.lproj`, `fr.lproj`, ...) and
//! a resource file name, strings-check reports locales missing the file,
//! keys defined twice in one file, and (optionally) keys that some locales
//! define but others lack. It only reports; it never edits files.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, pipeline, output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Locale discovery and key extraction
//! - `issues`: Issue type definitions and the `Report` trait
//! - `rules`: Cross-locale checks over extracted keys

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
