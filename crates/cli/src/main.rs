use std::fs;
use std::io::Read;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};

use spanset_engine::{run_classify, run_coverage, ParseOptions};

use crate::cli::CLI;


mod cli;
mod render;


fn main() -> anyhow::Result<()> {
    let args = CLI::parse();

    let env_filter = tracing_subscriber::EnvFilter::builder().parse_lossy(
        std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV)
            .unwrap_or("info".to_string()),
    );

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();

    let text = read_input(args.file.as_deref())?;

    if args.classify {
        let report = run_classify(&text).context("failed to parse classification input")?;
        debug!(
            spans = report.spans.len(),
            values = report.classifications.len(),
            errors = report.errors.len(),
            "parsed classification input"
        );
        if !report.errors.is_empty() {
            warn!(count = report.errors.len(), "some input lines were rejected");
        }
        render::print_classify(&report, args.json)?;
    } else {
        let options = ParseOptions {
            delimiter: args.delimiter
        };
        let report = run_coverage(&text, &options);
        debug!(
            spans = report.spans.len(),
            errors = report.errors.len(),
            "parsed and merged ranges"
        );
        if !report.errors.is_empty() {
            warn!(count = report.errors.len(), "some segments were rejected");
        }
        if report.is_empty() {
            warn!("no usable ranges in input");
        }
        render::print_coverage(&report, args.json)?;
    }

    Ok(())
}


fn read_input(file: Option<&str>) -> anyhow::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read input from '{}'", path)),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
