use std::time::Duration;

use clap::Parser;

use sign_server::display::{DisplayClient, DisplayConfig};
use sign_server::domain::{Color, Palette};
use sign_server::driver::{
    AdminClientConfig, AdminConfigSource, DisplayDriver, DriverSettings, shutdown_channel,
};
use sign_server::logging;
use sign_server::nextbus::{NextbusClient, NextbusConfig, PredictionService};

/// Polls predictions for the configured stops and writes them to the sign.
#[derive(Parser)]
#[command(name = "sign-driver", version, about, long_about = None)]
struct Cli {
    /// Base URL of the display server
    #[arg(long, env = "SIGN_DISPLAY_ADDR", default_value = "http://raspberrypi.local:50051")]
    display_addr: String,

    /// Base URL of the admin server
    #[arg(long, env = "SIGN_ADMIN_ADDR", default_value = "http://localhost:8080")]
    admin_addr: String,

    /// Base URL of the NextBus JSON feed
    #[arg(long, env = "NEXTBUS_URL")]
    nextbus_url: Option<String>,

    /// Seconds to hold each message on the display
    #[arg(long, env = "SIGN_WRITE_INTERVAL_SECS", default_value_t = 5)]
    write_interval_secs: u64,

    /// Palette colour as "r,g,b" with channels in [0, 1]; repeat to build
    /// the palette in order
    #[arg(long = "color", value_name = "R,G,B", env = "SIGN_PALETTE", value_delimiter = ';')]
    colors: Vec<Color>,
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
    let palette = if cli.colors.is_empty() {
        Palette::default()
    } else {
        Palette::new(cli.colors)?
    };
    let settings = DriverSettings::default()
        .with_palette(palette)
        .with_write_interval(Duration::from_secs(cli.write_interval_secs));

    let mut nextbus_config = NextbusConfig::default();
    if let Some(url) = cli.nextbus_url {
        nextbus_config = nextbus_config.with_base_url(url);
    }
    let predictions = PredictionService::new(NextbusClient::new(nextbus_config)?);

    let config = AdminConfigSource::new(AdminClientConfig::new(&cli.admin_addr))?;
    let display = DisplayClient::new(DisplayConfig::new(&cli.display_addr))?;

    let (trigger, shutdown) = shutdown_channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received");
            trigger.trigger();
        }
    });

    tracing::info!(
        display = %cli.display_addr,
        admin = %cli.admin_addr,
        interval_secs = cli.write_interval_secs,
        "driver starting"
    );

    DisplayDriver::new(config, predictions, display, settings)
        .with_shutdown(shutdown)
        .run()
        .await?;

    tracing::info!("driver stopped");
    Ok(())
}
