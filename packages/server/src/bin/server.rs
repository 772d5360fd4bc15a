//! Room-scoped WebSocket chat relay server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin chanoma-server
//! ```

use clap::Parser;

use chanoma_shared::logger::setup_logger;

/// Chanoma chat relay server
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3500)]
    port: u16,

    /// Directory of static assets served at the root path
    #[arg(long, default_value = "public")]
    public_dir: std::path::PathBuf,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let config = chanoma_server::ServerConfig {
        host: args.host,
        port: args.port,
        public_dir: args.public_dir,
    };

    // Run the server
    if let Err(e) = chanoma_server::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
