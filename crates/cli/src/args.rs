use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "dns-preload")]
#[command(version)]
#[command(about = "Preload a DNS cache by resolving a configured list of names")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Preload A and AAAA records
    Hosts(PreloadArgs),
    /// Preload CNAME records
    Cname(PreloadArgs),
    /// Preload MX records, then the exchanges' addresses
    Mx(PreloadArgs),
    /// Preload NS records, then the nameservers' addresses
    Ns(PreloadArgs),
    /// Preload TXT records
    Txt(PreloadArgs),
    /// Preload PTR records for IP addresses
    Ptr(PreloadArgs),
    /// Preload every configured record type
    All(PreloadArgs),
    /// Work with configuration files
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Command {
    /// Query type name handed to the selector, if this is a preload command.
    pub fn preload(&self) -> Option<(&'static str, &PreloadArgs)> {
        match self {
            Command::Hosts(args) => Some(("hosts", args)),
            Command::Cname(args) => Some(("cname", args)),
            Command::Mx(args) => Some(("mx", args)),
            Command::Ns(args) => Some(("ns", args)),
            Command::Txt(args) => Some(("txt", args)),
            Command::Ptr(args) => Some(("ptr", args)),
            Command::All(args) => Some(("all", args)),
            Command::Config(_) => None,
        }
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print an empty configuration template
    Generate,
    /// Validate a configuration file
    Validate,
}

#[derive(Args, Debug, Clone)]
pub struct PreloadArgs {
    /// YAML file listing the names to preload
    #[arg(short = 'c', long)]
    pub config_file: PathBuf,

    /// Nameserver to preload
    #[arg(short = 's', long, default_value = "localhost")]
    pub server: String,

    #[arg(short = 'p', long, default_value_t = 53)]
    pub port: u16,

    /// Lookups in flight at once
    #[arg(short = 'w', long, default_value_t = 1)]
    pub workers: usize,

    /// Deadline for each lookup, e.g. `500ms` or `30s`
    #[arg(short = 't', long, default_value = "30s", value_parser = humantime::parse_duration)]
    pub timeout: Duration,

    /// Don't print individual results
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Don't print the batch introduction
    #[arg(short = 'm', long)]
    pub mute: bool,

    /// Resolve the hosts returned by MX and NS lookups
    #[arg(
        short = 'f',
        long,
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub full: bool,

    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Wait this long before the first query
    #[arg(long, default_value = "0s", value_parser = humantime::parse_duration)]
    pub delay: Duration,
}

impl PreloadArgs {
    pub fn nameserver(&self) -> String {
        format!("{}:{}", self.server, self.port)
    }
}
