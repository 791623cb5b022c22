// reset; cargo run -- --excel-file ./data/contacts.xlsx
// reset; cargo run -- --excel-file ./data/contacts.xls --sheet-name Contacts --format csv --output-dir ./out --timestamp

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use contact_importer::{
    console::{render_failed_rows, render_summary, render_valid_rows},
    utils::{file_timestamp, output_path},
    ERRORS_LOG_FILE,
};
use importer_lib::writer::{FAILED_ROWS_FILE_STEM, VALID_ROWS_FILE_STEM};
use importer_lib::{ContactImporterBuilder, OutputFormat, SheetTable};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    /// Excel workbook
    Xlsx,
    /// Comma-separated values
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Xlsx => OutputFormat::Xlsx,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

#[derive(Parser)]
#[command(name = "contact-importer")]
#[command(about = "Validate contact rows (Name, Email, Phone, Gender) in an Excel file and split them into valid and failed files")]
#[command(version)]
struct Args {
    /// Path to the .xlsx or .xls file to validate
    #[arg(short, long)]
    excel_file: PathBuf,

    /// Optional sheet name to validate (if not specified, validates the first sheet)
    #[arg(long)]
    sheet_name: Option<String>,

    /// Directory where valid_rows and failed_rows files are written
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// File format of the generated files
    #[arg(long, value_enum, default_value_t = FormatArg::Xlsx)]
    format: FormatArg,

    /// Append the current local date and time to the generated file names
    #[arg(long)]
    timestamp: bool,

    /// Only print the summary, not the row tables
    #[arg(short, long)]
    quiet: bool,

    /// Exit with status 1 when at least one row fails validation
    #[arg(long)]
    fail_on_invalid: bool,
}

fn main() -> anyhow::Result<()> {
    let arguments = Args::parse();
    let format = OutputFormat::from(arguments.format);

    let mut builder = ContactImporterBuilder::new(&arguments.excel_file);
    if let Some(sheet_name) = &arguments.sheet_name {
        builder = builder.sheet_name(sheet_name.clone());
    }

    let importer = match builder.build() {
        Ok(importer) => importer,
        Err(e) => {
            eprintln!("❌ Import failed with error: {e}");
            eprintln!("❌ Check {} for details.", ERRORS_LOG_FILE);
            std::process::exit(1);
        }
    };

    let report = importer.validate();

    println!("{}", render_summary(&report.summary));
    if !arguments.quiet {
        if !report.valid.is_empty() {
            println!("{}", render_valid_rows(&report.valid));
        }
        if !report.invalid.is_empty() {
            println!("{}", render_failed_rows(&report.invalid));
        }
    }

    std::fs::create_dir_all(&arguments.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            arguments.output_dir.display()
        )
    })?;
    let timestamp = arguments.timestamp.then(file_timestamp);

    if report.summary.invalid > 0 {
        let path = output_path(
            &arguments.output_dir,
            FAILED_ROWS_FILE_STEM,
            format,
            timestamp.as_deref(),
        );
        SheetTable::failed_rows(&report.invalid)
            .write_to_path(&path, format)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("✅ Failed rows written to: {}", path.display());
    }

    if report.summary.valid > 0 {
        let path = output_path(
            &arguments.output_dir,
            VALID_ROWS_FILE_STEM,
            format,
            timestamp.as_deref(),
        );
        SheetTable::valid_rows(&report.valid)
            .write_to_path(&path, format)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("✅ Valid rows written to: {}", path.display());
    }

    if report.has_failures() {
        eprintln!(
            "❌ Validation failed for {} row(s). Check {} for details.",
            report.summary.invalid, ERRORS_LOG_FILE
        );
        if arguments.fail_on_invalid {
            std::process::exit(1);
        }
    } else {
        println!("✅ Validation completed!");
    }

    Ok(())
}
