use anyhow::Context;
use clap::{Parser, Subcommand};
use clauselens_core::normalize::normalize;
use clauselens_core::present::{DisplayRecord, present};
use clauselens_core::request::clean_input;
use clauselens_core::result::AnalysisResult;
use clauselens_upstream::{DEFAULT_PIPELINE_URL, UpstreamClient, UpstreamConfig};

mod display;

/// Terminal client for the clauselens analysis gateway.
#[derive(Parser)]
#[command(name = "clauselens", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyse clause text via a running gateway, or directly against the
    /// pipeline when an API key is given.
    Analyze {
        /// Clause text; multiple words are joined with spaces.
        text: Vec<String>,

        /// Gateway base URL.
        #[arg(long, default_value = "http://127.0.0.1:5000")]
        server: String,

        /// Call the pipeline directly with this key instead of the gateway.
        #[arg(long, env = "PIPELINE_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Pipeline execution endpoint (direct mode only).
        #[arg(long, default_value = DEFAULT_PIPELINE_URL)]
        pipeline_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            text,
            server,
            api_key,
            pipeline_url,
        } => {
            let joined = text.join(" ");
            let input = clean_input(&joined).context("no clause text given")?;

            let record = match api_key {
                Some(api_key) => analyze_direct(input, pipeline_url, api_key).await,
                None => analyze_via_gateway(input, &server).await,
            };
            display::print_record(&record);
        }
    }
    Ok(())
}

async fn analyze_direct(input: &str, pipeline_url: String, api_key: String) -> DisplayRecord {
    let upstream = UpstreamClient::new(UpstreamConfig {
        pipeline_url,
        api_key,
    });
    match upstream.analyze(input).await {
        Ok(raw) => present(&normalize(&raw)),
        Err(err) => DisplayRecord::failure(err.public_message()),
    }
}

async fn analyze_via_gateway(input: &str, server: &str) -> DisplayRecord {
    match fetch_from_gateway(input, server).await {
        Ok(record) => record,
        Err(err) => DisplayRecord::failure(format!("Error: {err}")),
    }
}

/// POST the gateway's analyze route and fold its response into a display
/// record. The gateway already normalised; only field extraction and
/// presentation remain.
async fn fetch_from_gateway(input: &str, server: &str) -> anyhow::Result<DisplayRecord> {
    let url = format!("{}/analyze", server.trim_end_matches('/'));
    let resp = reqwest::Client::new()
        .post(&url)
        .json(&serde_json::json!({ "userInput": input }))
        .send()
        .await?;

    let status = resp.status();
    let body: serde_json::Value = resp.json().await?;

    if !status.is_success() {
        let message = body
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap_or("request failed")
            .to_string();
        return Ok(DisplayRecord::failure(message));
    }

    let result = AnalysisResult::from_value(&body);
    Ok(present(&Ok(result)))
}
