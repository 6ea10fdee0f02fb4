use crate::args::PreloadArgs;
use crate::bootstrap::load_config;
use crate::di::UseCases;
use anyhow::Context;
use dns_preload_infrastructure::NameserverLookup;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Runs one preload and prints the completion line, failed or not, unless
/// `quiet` is set.
pub async fn run(query_type: &str, args: &PreloadArgs, started: Instant) -> anyhow::Result<()> {
    let outcome = preload(query_type, args).await;

    if !args.quiet {
        println!("Preload completed in {:?}", started.elapsed());
    }
    outcome
}

async fn preload(query_type: &str, args: &PreloadArgs) -> anyhow::Result<()> {
    let config = load_config(&args.config_file)?;

    if !args.delay.is_zero() {
        info!(delay = ?args.delay, "Waiting before preloading");
        tokio::time::sleep(args.delay).await;
    }

    let lookup = NameserverLookup::connect(&args.server, args.port, args.timeout)
        .await
        .with_context(|| format!("connecting to nameserver {}", args.nameserver()))?;

    info!(
        nameserver = %lookup.server_addr(),
        query_type,
        workers = args.workers,
        "Starting preload"
    );

    let use_cases = UseCases::new(Arc::new(lookup), args);
    use_cases.run_queries.execute(query_type, &config).await?;
    Ok(())
}
