//! Server configuration loaded from environment variables.
//!
//! All settings have safe defaults. Override any variable at container /
//! process startup — no config file required.
//!
//! | Variable                    | Default   | Description                                 |
//! |-----------------------------|-----------|---------------------------------------------|
//! | `PATHWAY_HOST`              | `0.0.0.0` | HTTP bind address                           |
//! | `PATHWAY_PORT`              | `8050`    | HTTP listen port                            |
//! | `PATHWAY_LOG_LEVEL`         | `info`    | tracing level (trace/debug/info/warn/error) |
//! | `PATHWAY_LAYOUT_SEED`       | `42`      | RNG seed for the force-directed layout      |
//! | `PATHWAY_LAYOUT_ITERATIONS` | `50`      | Layout iteration count                      |

/// Runtime configuration for the dashboard server process.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP bind address.
    pub host: String,

    /// HTTP listen port.
    pub port: u16,

    /// Tracing filter string, e.g. `"pathway_server=debug,info"`.
    pub log_level: String,

    /// Seed for the spring layout. The page is deterministic given this.
    pub layout_seed: u64,

    /// Force iterations of the spring layout.
    pub layout_iterations: usize,
}

impl Config {
    /// Load configuration from environment variables, applying defaults
    /// where a variable is absent or unparseable.
    pub fn from_env() -> Self {
        Self {
            host:              env_str("PATHWAY_HOST", "0.0.0.0"),
            port:              env_parse("PATHWAY_PORT", 8050),
            log_level:         env_str("PATHWAY_LOG_LEVEL", "info"),
            layout_seed:       env_parse("PATHWAY_LAYOUT_SEED", 42),
            layout_iterations: env_parse("PATHWAY_LAYOUT_ITERATIONS", 50),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host:              "0.0.0.0".to_string(),
            port:              8050,
            log_level:         "info".to_string(),
            layout_seed:       42,
            layout_iterations: 50,
        }
    }
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
