use clap::Parser;
use clauselens_upstream::{DEFAULT_PIPELINE_URL, UpstreamClient, UpstreamConfig};

mod routes;
mod server;

/// Contract-clause analysis gateway.
#[derive(Parser)]
#[command(name = "clauselens-server", version)]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:5000")]
    listen: String,

    /// Pipeline execution endpoint.
    #[arg(long, default_value = DEFAULT_PIPELINE_URL)]
    pipeline_url: String,

    /// API key for the pipeline. Missing key is a startup error, never a
    /// per-request one.
    #[arg(long, env = "PIPELINE_API_KEY", hide_env_values = true)]
    api_key: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    tracing::info!("clauselens v{}", env!("CARGO_PKG_VERSION"));

    let upstream = UpstreamClient::new(UpstreamConfig {
        pipeline_url: args.pipeline_url,
        api_key: args.api_key,
    });

    server::run(&args.listen, upstream).await
}
