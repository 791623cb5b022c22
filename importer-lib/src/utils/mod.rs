mod datetime;
mod filesystem;
mod string;

pub use datetime::{get_local_datetime_with_format, get_utc_iso_datetime};
pub use filesystem::write_error_to_log;
pub use string::{is_whitespace_char, normalize_string, trim_whitespace, value_to_cell_string};
