use anyhow::{Context, Result};
use clap::Parser;
use cv_generator::{generate_cv, AppConfig};
use std::path::PathBuf;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "generate-cv")]
#[command(about = "Fill the company DOCX template with a candidate's CV")]
struct Cli {
    /// Candidate data (UTF-8 JSON)
    data_json_path: PathBuf,
    /// Company template (.docx)
    template_path: PathBuf,
    /// Output file, or a directory to write CV_<name>.docx into
    output_path: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let report = generate_cv(
        &cli.data_json_path,
        &cli.template_path,
        &cli.output_path,
        &config,
    )
    .with_context(|| {
        format!(
            "Failed to generate CV from {}",
            cli.data_json_path.display()
        )
    })?;

    println!("\n✅ CV generated successfully!");
    println!("   ✓ Language: {}", report.language.code().to_uppercase());
    println!("   ✓ Blind CV: {}", if report.blind { "yes" } else { "no" });
    println!("   ✓ Template header and footer preserved");
    println!("   ✓ Output: {}", report.output_path.display());

    Ok(())
}
