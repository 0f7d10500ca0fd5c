mod emit;
mod error;
mod parser;
mod pdf;
mod settings;

use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use settings::{Overrides, Settings};
use parser::brands::BrandTable;
use parser::Catalog;

#[derive(Parser)]
#[command(
    name = "vehicle_catalog",
    about = "Extract the vehicle catalog from the brochure PDF into a TypeScript data module"
)]
struct Cli {
    /// Brochure PDF to read (default: carros.pdf, or CATALOG_PDF_PATH)
    #[arg(long)]
    pdf: Option<String>,
    /// Generated module path (default: src/lib/vehicle-data.ts, or CATALOG_OUTPUT_PATH)
    #[arg(short, long)]
    output: Option<String>,
    /// Parse and report counts without writing the module
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let settings = Settings::load(&Overrides {
        pdf_path: cli.pdf,
        output_path: cli.output,
    })
    .context("Failed to load settings")?;
    info!(?settings, "Starting catalog extraction");

    let brands = BrandTable::builtin()?;

    println!("Reading PDF: {}", settings.pdf_path.display());
    let pages = pdf::extract_pages(&settings.pdf_path)?;
    let catalog = parse_pages(&pages, &brands)?;

    println!("Lines read:            {}", catalog.stats.lines);
    println!("Raw vehicles found:    {}", catalog.raw.len());
    println!("Unique vehicles found: {}", catalog.vehicles.len());

    let s = &catalog.stats;
    info!(
        blocks = s.blocks,
        dropped = s.dropped(),
        missing_model = s.missing_model,
        missing_year = s.missing_year,
        orphan_lines = s.orphan_lines,
        "Block summary"
    );
    let motorcycles = catalog
        .vehicles
        .iter()
        .filter(|v| brands.is_motorcycle(&v.brand))
        .count();
    info!(
        cars = catalog.vehicles.len() - motorcycles,
        motorcycles, "Catalog breakdown"
    );

    if cli.dry_run {
        println!("Dry run: {} not written.", settings.output_path.display());
        return Ok(());
    }

    let source = settings
        .pdf_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| settings.pdf_path.display().to_string());
    let names = emit::ModuleNames {
        type_name: &settings.type_name,
        const_name: &settings.const_name,
        source: &source,
    };
    let module = emit::render_module(&catalog.vehicles, &names);
    emit::write_module(&settings.output_path, &module)?;
    println!("TypeScript module generated at: {}", settings.output_path.display());

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}

fn parse_pages(pages: &[pdf::PageLines], brands: &BrandTable) -> anyhow::Result<Catalog> {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(pages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] page {pos}/{len}")?
            .progress_chars("#>-"),
    );

    let catalog = parser::parse_pages(pages, brands, |page| {
        debug!(page = page.number, lines = page.lines.len(), "Parsed page");
        pb.inc(1);
    });
    pb.finish_and_clear();

    info!(pages = pages.len(), "Parsed all pages");
    Ok(catalog)
}
