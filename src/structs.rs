use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Ping every configured connection after opening it.
    #[arg(long)]
    pub ping: bool,

    /// Engine used to render --sql, the default engine when omitted.
    #[arg(long)]
    pub engine: Option<String>,

    /// Raw SQL to render; `?` placeholders are filled from --arg.
    #[arg(long)]
    pub sql: Option<String>,

    /// Placeholder value, repeat for each `?`.
    #[arg(long = "arg")]
    pub args: Vec<String>,
}
