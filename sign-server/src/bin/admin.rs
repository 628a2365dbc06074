use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::Duration;
use clap::Parser;

use sign_server::admin::{AppState, FileConfigStore, create_router};
use sign_server::agencies::{AgencyCache, AgencyCacheConfig};
use sign_server::logging;
use sign_server::nextbus::{NextbusClient, NextbusConfig};

/// Admin web server for the transit sign.
#[derive(Parser)]
#[command(name = "sign-admin", version, about, long_about = None)]
struct Cli {
    /// JSON file holding the sign configuration
    #[arg(long, env = "SIGN_CONFIG_FILE", default_value = "sign.json")]
    config_file: PathBuf,

    /// Base URL of the NextBus JSON feed
    #[arg(long, env = "NEXTBUS_URL")]
    nextbus_url: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "SIGN_ADMIN_PORT", default_value_t = 8080)]
    port: u16,

    /// Directory of static assets served under /public
    #[arg(long, env = "SIGN_PUBLIC_DIR", default_value = "public")]
    public_dir: String,

    /// How long the agency list is trusted before refreshing
    #[arg(
        long,
        env = "SIGN_CACHE_TTL_HOURS",
        default_value_t = 24,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    cache_ttl_hours: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_ttl_defaults_to_a_day() {
        let cli = Cli::try_parse_from(["sign-admin"]).unwrap();
        assert_eq!(cli.cache_ttl_hours, 24);
    }

    #[test]
    fn cache_ttl_must_be_positive() {
        assert!(Cli::try_parse_from(["sign-admin", "--cache-ttl-hours", "0"]).is_err());
        assert!(Cli::try_parse_from(["sign-admin", "--cache-ttl-hours", "-5"]).is_err());
        assert!(Cli::try_parse_from(["sign-admin", "--cache-ttl-hours", "99999999999"]).is_err());
    }

    #[test]
    fn cache_ttl_accepts_hours() {
        let cli = Cli::try_parse_from(["sign-admin", "--cache-ttl-hours", "6"]).unwrap();
        assert_eq!(cli.cache_ttl_hours, 6);
    }
}

#[tokio::main]
async fn main() {
    logging::init("info");
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut nextbus_config = NextbusConfig::default();
    if let Some(url) = cli.nextbus_url {
        nextbus_config = nextbus_config.with_base_url(url);
    }
    let nextbus = NextbusClient::new(nextbus_config)?;

    let cache_config = AgencyCacheConfig::default().with_ttl(Duration::hours(i64::from(cli.cache_ttl_hours)));
    let agencies = AgencyCache::new(nextbus, &cache_config);

    let store = FileConfigStore::new(&cli.config_file);
    let state = AppState::new(store, agencies);
    let app = create_router(state, &cli.public_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    tracing::info!(
        %addr,
        config_file = %cli.config_file.display(),
        "admin server listening"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
