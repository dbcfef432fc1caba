use clap::Parser;

/// Process configuration, read once at startup.
///
/// Every flag falls back to an environment variable so the binary can be
/// driven entirely from the environment in deployment.
#[derive(Debug, Clone, Parser)]
#[command(name = "server", about = "Task management backend")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
    pub bind: String,
    /// HMAC secret for signing session tokens.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub secret: String,
    /// PostgreSQL connection string. Without it, state lives in memory.
    #[arg(long, env = "DB_URL", hide_env_values = true)]
    pub database: Option<String>,
    /// HTTP worker count.
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.secret.trim().is_empty(), "JWT_SECRET must not be empty");
        anyhow::ensure!(self.workers > 0, "at least one worker is required");
        Ok(())
    }
    pub fn crypto(&self) -> crate::Crypto {
        crate::Crypto::new(self.secret.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "server",
            "--secret",
            "s3cret",
            "--bind",
            "0.0.0.0:9000",
            "--workers",
            "2",
        ])
        .unwrap();
        assert!(config.bind == "0.0.0.0:9000");
        assert!(config.workers == 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_secret_is_rejected() {
        let config = Config::try_parse_from(["server", "--secret", "  "]).unwrap();
        assert!(config.validate().is_err());
    }
}
