use clap::{ArgAction, Parser};
use log::{LevelFilter, info};
use preflight::style::{Configuration, OPTIONS};
use preflight::{PipelineError, load_checklist, resolve_output_path, write_json, write_pdf};
use std::path::PathBuf;

/// Typesets a checklist markup file into a print-ready PDF.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Checklist markup file
    #[arg(short, long, required_unless_present = "print_config")]
    input: Option<PathBuf>,

    /// Output directory or file name; `.pdf` is appended when missing
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Also write the page description as JSON next to the PDF
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Leave page numbers out of the footer
    #[arg(long, default_value_t = false)]
    no_page_numbers: bool,

    /// List every configuration option with its default and exit
    #[arg(long, default_value_t = false)]
    print_config: bool,

    /// More log output, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), PipelineError> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if args.print_config {
        print_config();
        return Ok(());
    }

    let Some(input) = args.input else {
        return Ok(());
    };

    let (mut checklist, _) = load_checklist(&input)?;
    if args.no_page_numbers {
        checklist.config.show_page_numbers = false;
    }

    let pdf_path = resolve_output_path(&input, &args.output);
    if args.json {
        let json_path = pdf_path.with_extension("json");
        write_json(&mut checklist.clone(), &json_path)?;
        println!("Wrote {}", json_path.display());
    }
    write_pdf(&mut checklist, &pdf_path)?;
    info!("{} section(s) after pagination", checklist.section_count());
    println!("Wrote {}", pdf_path.display());
    Ok(())
}

fn print_config() {
    let defaults = Configuration::default();
    let width = OPTIONS.iter().map(|o| o.name.len()).max().unwrap_or(0);
    for option in OPTIONS {
        let default = defaults
            .get(option.name)
            .map(|v| v.to_string())
            .unwrap_or_default();
        println!(
            "// {:<width$} = {:<16} {}",
            option.name,
            default,
            option.description,
            width = width
        );
    }
}
