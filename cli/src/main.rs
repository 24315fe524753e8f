//! docx2pdf CLI - DOCX to PDF conversion tool

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use docx2pdf::ConvertOptions;

#[derive(Parser)]
#[command(name = "docx2pdf")]
#[command(version)]
#[command(about = "Convert a DOCX document to a paginated PDF", long_about = None)]
struct Cli {
    /// Input DOCX file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output PDF file (defaults to the input path with a .pdf extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Page margin in points
    #[arg(long, default_value = "40")]
    margin: f32,

    /// Font size in points
    #[arg(long, default_value = "12")]
    font_size: f32,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension("pdf"));
    log::debug!("converting {} -> {}", cli.input.display(), output.display());

    let options = ConvertOptions::new()
        .with_margin(cli.margin)
        .with_font_size(cli.font_size);

    match docx2pdf::convert_file_with_options(&cli.input, &output, options) {
        Ok(()) => {
            println!("{} {}", "Saved to".green(), output.display());
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}
