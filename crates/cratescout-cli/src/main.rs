use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cratescout_api::RawContentClient;
use cratescout_core::{candidate_manifest_urls, Mode, RunConfig};
use cratescout_deps::extract_dependencies;

#[derive(Parser)]
#[command(name = "cratescout")]
#[command(version, about = "Resolve a crate's direct dependencies from its GitHub manifest", long_about = None)]
struct Cli {
    /// Path to the run settings file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - helps when things go sideways
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cratescout=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = RunConfig::load(&cli.config)?;

    println!("Loaded settings:");
    println!("  package name:   {}", config.package_name);
    println!("  repository URL: {}", config.repository_url);
    println!("  mode:           {}", config.mode);
    println!("  version:        {}", config.version);
    println!("  filter:         {:?}", config.filter_substring);
    println!();

    if config.mode != Mode::Git {
        println!("Mode '{}' is not supported yet.", config.mode);
        return Ok(());
    }

    let urls = candidate_manifest_urls(&config.repository_url, &config.version)?;
    println!("Candidate manifest URLs:");
    for url in &urls {
        println!("  - {}", url);
    }
    println!();

    tracing::info!("Fetching manifest for {}", config.package_name);
    println!("Fetching manifest...");
    let client = RawContentClient::new();
    let manifest = client.fetch_manifest(&urls).await?;
    println!("Manifest fetched.");
    println!();

    let deps = extract_dependencies(&manifest, &config.filter_substring);
    render_dependencies(&deps, &config.filter_substring);

    Ok(())
}

/// Print the extracted table sorted by name, or a not-found notice that
/// mentions the active filter.
fn render_dependencies(
    deps: &std::collections::HashMap<String, String>,
    filter: &str,
) {
    if deps.is_empty() {
        if filter.is_empty() {
            println!("No dependencies found.");
        } else {
            println!("No dependencies found (filter: {:?}).", filter);
        }
        return;
    }

    println!("Direct dependencies:");
    let mut entries: Vec<_> = deps.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    for (name, version) in entries {
        println!("  {} — {}", name, version);
    }
}
