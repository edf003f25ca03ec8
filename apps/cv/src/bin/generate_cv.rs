//! Writes the CV PDFs to disk.
//!
//!   generate-cv            # all five templates
//!   generate-cv 3          # template 3 only
//!   generate-cv --out-dir dist

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio_cv::config::Config;
use portfolio_cv::errors::CvError;
use portfolio_cv::load_resume;
use portfolio_cv::render::batch::{generate, TemplateSelector};
use portfolio_cv::render::Template;

/// Generate the portfolio CV PDFs
#[derive(Parser, Debug)]
#[command(name = "generate-cv")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Template number (1-5). Omit to generate all of them.
    template: Option<String>,

    /// Output directory [env: CV_OUTPUT_DIR, default: public]
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("portfolio_cv=warn,generate_cv={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Reject a bad selector before touching the filesystem.
    let selector = match TemplateSelector::from_arg(cli.template.as_deref()) {
        Ok(selector) => selector,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let out_dir = cli.out_dir.unwrap_or_else(|| config.output_dir.clone());

    match run(&config, selector, &out_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, selector: TemplateSelector, out_dir: &Path) -> Result<(), CvError> {
    let resume = load_resume(config)?;
    generate(&resume, selector, out_dir, |cv| println!("{}", cv.completion_line()))?;

    if selector == TemplateSelector::All {
        println!(
            "\nAll {} CVs generated in {}",
            Template::ALL.len(),
            out_dir.display()
        );
    }
    Ok(())
}
