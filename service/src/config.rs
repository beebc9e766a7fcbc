use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;

const DEFAULT_INTERFACE: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The host interface to listen for incoming connections
    #[arg(short, long, env = "USER_LOOKUP_INTERFACE", default_value = DEFAULT_INTERFACE)]
    pub interface: String,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env = "USER_LOOKUP_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env = "USER_LOOKUP_LOG_LEVEL_FILTER",
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// Returns the `interface:port` pair the HTTP listener binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.interface, self.port)
    }
}
