//! Ribbon report generator
//!
//! Reads a compressed ribbon export (or the raw ribbon XML), resolves every
//! button against its command and rule definitions, and writes a text report
//! named `<entity>_RibbonButtons.txt`.

#![forbid(unsafe_code)]

use clap::{Parser, ValueEnum};
use log::info;
use ribbonview::output::{create_report_file, report_title};
use ribbonview::{
    ParameterPolicy, Report, ReportRenderer, ResolverConfig, RibbonDocument, TextRenderer, archive,
};
use std::fs;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

/// How to interpret the input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// Detect from the leading bytes
    Auto,
    /// ZIP archive containing RibbonXml.xml
    Archive,
    /// Raw ribbon XML
    Xml,
}

/// Command-line arguments for the ribbon report generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Ribbon export: a ZIP archive or a ribbon XML file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Logical name of the entity the ribbon belongs to
    #[arg(short, long)]
    entity: String,

    /// Directory the report is written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Input format
    #[arg(short, long, value_enum, default_value_t = InputFormat::Auto)]
    format: InputFormat,

    /// Skip JavaScript parameters without a Value attribute instead of failing
    #[arg(short, long)]
    lenient: bool,

    /// Print the report to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let entity = args.entity.trim();
    if entity.is_empty() {
        return Err("Entity name cannot be empty.".into());
    }

    let bytes = fs::read(&args.input)?;
    let document = match args.format {
        InputFormat::Auto => RibbonDocument::from_bytes(&bytes)?,
        InputFormat::Archive => RibbonDocument::from_xml(&archive::extract_ribbon_xml(&bytes)?)?,
        InputFormat::Xml => RibbonDocument::from_xml(std::str::from_utf8(&bytes)?)?,
    };
    info!("Loaded {} buttons from {}", document.buttons.len(), args.input.display());

    let policy = if args.lenient {
        ParameterPolicy::Lenient
    } else {
        ParameterPolicy::Strict
    };
    let config = ResolverConfig::new().with_parameter_policy(policy);
    let report = Report::build(&document, config, report_title(entity))?;

    let renderer = TextRenderer::new();
    if args.stdout {
        renderer.render(&report, &mut io::stdout().lock())?;
    } else {
        let (path, file) = create_report_file(&args.output_dir, entity, renderer.extension())?;
        let mut out = BufWriter::new(file);
        renderer.render(&report, &mut out)?;
        println!("Report created at: {}", path.display());
    }

    if !report.warnings.is_empty() {
        eprintln!(
            "{} parameter(s) skipped for missing 'Value' attribute",
            report.warnings.len()
        );
    }

    Ok(())
}
