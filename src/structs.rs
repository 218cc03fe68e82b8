use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Path of the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Decode the configured key and certificate once, then exit.
    #[arg(long)]
    pub check: bool
}
