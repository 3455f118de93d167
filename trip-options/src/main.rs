use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use trip_options::scenario::Scenario;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: trip-options <scenario.json>");
        return ExitCode::from(2);
    };

    let scenario = match Scenario::load(&path) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("Failed to load {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let options = scenario.build();
    tracing::info!(
        candidates = scenario.requests.len(),
        options = options.len(),
        order = %scenario.config.order,
        "ranked options"
    );
    if let Some(best) = options.first() {
        let stats = best.stats();
        tracing::info!(
            summary = %best.summary(),
            min = %stats.min_duration(),
            avg = %stats.avg_duration(),
            max = %stats.max_duration(),
            "best option"
        );
    }

    match serde_json::to_string_pretty(&options) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize options: {e}");
            ExitCode::FAILURE
        }
    }
}
