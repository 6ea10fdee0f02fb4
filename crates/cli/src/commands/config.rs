use crate::args::ConfigCommand;
use dns_preload_domain::{DomainError, PreloadConfig};

pub fn run(command: ConfigCommand) -> anyhow::Result<()> {
    match command {
        ConfigCommand::Generate => {
            print!("{}", template()?);
            Ok(())
        }
        ConfigCommand::Validate => Err(DomainError::NotImplemented("config validate".to_string()).into()),
    }
}

fn template() -> anyhow::Result<String> {
    Ok(PreloadConfig::empty_template()?)
}
