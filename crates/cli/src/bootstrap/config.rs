use anyhow::Context;
use dns_preload_domain::{PreloadConfig, RecordKind};
use std::path::Path;
use tracing::info;

pub fn load_config(config_path: &Path) -> anyhow::Result<PreloadConfig> {
    let config = PreloadConfig::load(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    info!(
        config_file = %config_path.display(),
        hosts = config.count(RecordKind::Hosts),
        cname = config.count(RecordKind::Cname),
        mx = config.count(RecordKind::Mx),
        ns = config.count(RecordKind::Ns),
        txt = config.count(RecordKind::Txt),
        ptr = config.count(RecordKind::Ptr),
        "Configuration loaded"
    );

    Ok(config)
}
