use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use docuhook::config::Config;
use docuhook::sink::TracingSink;
use docuhook::{create_app, AppState, VERSION};

fn print_banner(addr: &SocketAddr, config: &Config) {
    let display_host = if addr.ip().is_unspecified() {
        "localhost"
    } else {
        &addr.ip().to_string()
    };
    println!();
    println!("  \x1b[36m╔══════════════════════════════════════════╗\x1b[0m");
    println!("  \x1b[36m║\x1b[0m  \x1b[1;35mdocuhook\x1b[0m                                \x1b[36m║\x1b[0m");
    println!("  \x1b[36m║\x1b[0m  \x1b[90mDocuSign Connect → HMAC → downstream\x1b[0m    \x1b[36m║\x1b[0m");
    println!("  \x1b[36m╚══════════════════════════════════════════╝\x1b[0m");
    println!();
    println!(
        "  \x1b[32m→\x1b[0m Server running at \x1b[1;4mhttp://{}:{}\x1b[0m",
        display_host,
        addr.port()
    );
    println!("  \x1b[32m→\x1b[0m Version: \x1b[33m{}\x1b[0m", VERSION);
    println!(
        "  \x1b[32m→\x1b[0m Signature: \x1b[33m{}\x1b[0m (hmac-{})",
        config.connect.signature_header, config.connect.algorithm
    );
    println!();
    println!("  \x1b[90mEndpoints:\x1b[0m");
    println!("    \x1b[32mGET \x1b[0m /                   \x1b[90m← Banner\x1b[0m");
    println!("    \x1b[32mGET \x1b[0m /health             \x1b[90m← JSON status\x1b[0m");
    println!("    \x1b[34mPOST\x1b[0m /webhooks/docusign  \x1b[90m← Connect notifications\x1b[0m");
    println!();
    println!("  \x1b[90mPress Ctrl+C to stop\x1b[0m");
    println!();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for ctrl-c");
        return;
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // No secret, no listener.
    let config = Config::from_env()?;
    let state = AppState::new(&config, Arc::new(TracingSink));
    let app = create_app(state, config.max_body_bytes);

    let addr = SocketAddr::new(config.host, config.port);

    print_banner(&addr, &config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}
