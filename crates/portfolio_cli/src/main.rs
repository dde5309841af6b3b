//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `portfolio_core` linkage and report one catalog load.
//! - Keep output deterministic `key=value` lines for quick sanity checks.

use portfolio_core::{CatalogConfig, ProjectService};

fn main() {
    println!("portfolio_core ping={}", portfolio_core::ping());
    println!("portfolio_core version={}", portfolio_core::core_version());

    let config = CatalogConfig::from_env();
    let source = match config.build_source() {
        Ok(source) => source,
        Err(err) => {
            println!("catalog status=error error={err}");
            return;
        }
    };

    let service = ProjectService::with_options(source, config.normalize_options());
    let outcome = service.outcome();
    match outcome.error() {
        Some(err) => println!(
            "catalog location={} status=error error_code={} error={err}",
            config.data_location,
            err.error_code()
        ),
        None => println!(
            "catalog location={} status=ok projects={} labels={}",
            config.data_location,
            outcome.projects().len(),
            service.projects_stack().len()
        ),
    }
}
