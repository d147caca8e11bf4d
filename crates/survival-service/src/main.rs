//! Passenger Survival Predictor - Main Entry Point

use anyhow::Context;
use clap::Parser;
use feature_builder::RawRecord;
use inference_engine::{BundleLoader, SurvivalPredictor};
use std::path::PathBuf;
use std::sync::Arc;
use storage::Repository;
use survival_service::{init_logging, PassengerService, Settings};
use tracing::{error, info};

/// Score passenger submissions against a trained survival model
#[derive(Debug, Parser)]
#[command(name = "survival-predictor", version)]
struct Cli {
    /// JSON array of passenger submissions
    input: PathBuf,

    /// Settings file (defaults to ./survival.toml when present)
    settings: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let input = cli.input;

    let settings = Settings::load(cli.settings.as_deref()).context("loading settings")?;
    init_logging(&settings.log_level)?;

    info!("=== Survival Predictor v{} ===", env!("CARGO_PKG_VERSION"));

    let bundle = BundleLoader::load(&settings.bundle_path)
        .with_context(|| format!("loading model bundle {}", settings.bundle_path.display()))?;
    let service = Arc::new(PassengerService::new(
        SurvivalPredictor::new(Arc::new(bundle)),
        Repository::new(),
        settings.validation.clone(),
    ));

    let contents = std::fs::read_to_string(&input)
        .with_context(|| format!("reading submissions {}", input.display()))?;
    let submissions: Vec<RawRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("parsing submissions {}", input.display()))?;
    info!("Scoring {} submission(s)", submissions.len());

    let handles: Vec<_> = submissions
        .into_iter()
        .map(|submission| {
            let service = Arc::clone(&service);
            tokio::task::spawn_blocking(move || service.create_passenger(submission))
        })
        .collect();

    let mut rejected = 0;
    for handle in handles {
        if let Err(e) = handle.await.context("scoring task panicked")? {
            error!("Submission rejected: {}", e);
            rejected += 1;
        }
    }

    let created = service.list_passengers()?;
    println!("{}", serde_json::to_string_pretty(&created)?);

    info!("{} created, {} rejected", created.len(), rejected);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_settings_path_is_optional() {
        let cli = Cli::try_parse_from(["survival-predictor", "demos/submissions.json"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("demos/submissions.json"));
        assert!(cli.settings.is_none());

        let cli = Cli::try_parse_from([
            "survival-predictor",
            "demos/submissions.json",
            "demos/survival.toml",
        ])
        .unwrap();
        assert_eq!(cli.settings, Some(PathBuf::from("demos/survival.toml")));
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["survival-predictor"]).is_err());
    }
}
