use std::net::SocketAddr;

use clap::Parser;

use sign_server::display::fake::{FakeDisplay, create_router};
use sign_server::logging;

/// Stand-in for the sign's display server that logs what it is sent.
#[derive(Parser)]
#[command(name = "sign-fake-display", version, about, long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "SIGN_DISPLAY_PORT", default_value_t = 50051)]
    port: u16,
}

#[tokio::main]
async fn main() {
    logging::init("info");
    let cli = Cli::parse();

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    if let Err(e) = serve(addr).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn serve(addr: SocketAddr) -> std::io::Result<()> {
    let app = create_router(FakeDisplay::new());

    tracing::info!(%addr, "fake display listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}
