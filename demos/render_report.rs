//! Render a ribbon export to stdout
//!
//! Usage: `cargo run --example render_report -- <ribbon.zip|ribbon.xml> [entity]`

use ribbonview::output::report_title;
use ribbonview::{Report, ReportRenderer, ResolverConfig, RibbonDocument, TextRenderer};
use std::env;
use std::fs;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("Usage: {} <ribbon.zip|ribbon.xml> [entity]", args[0]);
        std::process::exit(1);
    };
    let entity = args.get(2).map(String::as_str).unwrap_or("entity");

    let document = RibbonDocument::from_bytes(&fs::read(path)?)?;
    println!(
        "Loaded {} buttons, {} commands\n",
        document.buttons.len(),
        document.command_count()
    );

    let report = Report::build(&document, ResolverConfig::new(), report_title(entity))?;
    TextRenderer::new().render(&report, &mut io::stdout().lock())?;
    Ok(())
}
