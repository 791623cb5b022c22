use std::path::{Path, PathBuf};

use importer_lib::OutputFormat;
use importer_lib::utils::get_local_datetime_with_format;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Current local time formatted for use in a file name
pub fn file_timestamp() -> String {
    return get_local_datetime_with_format(TIMESTAMP_FORMAT);
}

/// Build an output file name such as `failed_rows.xlsx` or `valid_rows_2025-01-31_09-15-00.csv`
pub fn output_file_name(stem: &str, format: OutputFormat, timestamp: Option<&str>) -> String {
    let filename = match timestamp {
        Some(timestamp) => format!("{stem}_{timestamp}.{}", format.extension()),
        None => format!("{stem}.{}", format.extension()),
    };
    return filename.to_lowercase();
}

pub fn output_path(
    output_dir: &Path,
    stem: &str,
    format: OutputFormat,
    timestamp: Option<&str>,
) -> PathBuf {
    output_dir.join(output_file_name(stem, format, timestamp))
}
