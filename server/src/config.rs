use clap::Parser;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Touchcast relay server
#[derive(Parser, Serialize, Deserialize, Clone, Debug)]
#[command(name = "touchcast-server", version, about = "Shared touch canvas relay server")]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "TOUCHCAST_PORT", default_value = "3000")]
    pub port: u16,

    /// Bind address
    #[arg(long, env = "TOUCHCAST_BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind_address: String,

    /// Path to TOML config file
    #[arg(long, default_value = "./touchcast.toml")]
    pub config: String,

    /// Enable structured JSON logging (for Docker/production)
    #[arg(long, env = "TOUCHCAST_JSON_LOGS")]
    pub json_logs: bool,

    /// Output a commented TOML config template and exit
    #[arg(long)]
    pub generate_config: bool,

    /// Path of the client page served at / and /index.html
    #[arg(long, env = "TOUCHCAST_INDEX_HTML", default_value = "./assets/index.html")]
    pub index_html: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_address: "0.0.0.0".to_string(),
            config: "./touchcast.toml".to_string(),
            json_logs: false,
            generate_config: false,
            index_html: "./assets/index.html".to_string(),
        }
    }
}

impl Config {
    /// Load config with layered precedence:
    /// built-in defaults < TOML file < env vars (TOUCHCAST_*) < CLI args
    pub fn load() -> Result<Self, figment::Error> {
        let cli = Config::parse();
        let config_path = cli.config.clone();

        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("TOUCHCAST_"))
            .merge(Serialized::defaults(cli))
            .extract()
    }
}

/// Generate a commented TOML config template
pub fn generate_config_template() -> String {
    r#"# Touchcast Relay Server Configuration
# Place this file at ./touchcast.toml or specify with --config <path>
# All settings can be overridden via environment variables (TOUCHCAST_PORT, etc.)
# or CLI flags (--port, etc.)

# Server port (default: 3000)
# port = 3000

# Bind address (default: 0.0.0.0 — all interfaces)
# bind_address = "0.0.0.0"

# Enable structured JSON logging for Docker/production
# json_logs = false

# Path of the client page served at / and /index.html
# index_html = "./assets/index.html"
"#
    .to_string()
}
