#![allow(clippy::needless_return)]

pub mod console;
pub mod utils;

pub use importer_lib::ERRORS_LOG_FILE;
