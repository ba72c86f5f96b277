use clap::Parser;
use fixed_latency_server::bench::{self, LoadPlan};
use fixed_latency_server::observability::logging;
use reqwest::Method;

#[derive(Parser)]
#[command(name = "latency-bench")]
#[command(about = "Fire concurrent requests at an HTTP endpoint and report latency", long_about = None)]
struct Cli {
    /// Target URL
    #[arg(short, long, default_value = "http://127.0.0.1:8080/")]
    url: String,

    /// Total number of requests to send
    #[arg(short = 'n', long, default_value_t = 1200)]
    requests: usize,

    /// Number of concurrent workers
    #[arg(short, long, default_value_t = 1)]
    concurrency: usize,

    /// HTTP method
    #[arg(short, long, default_value = "POST")]
    method: Method,

    /// Request body, sent verbatim
    #[arg(short, long)]
    body: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_with_default("fixed_latency_server=warn");

    let plan = LoadPlan {
        url: cli.url,
        requests: cli.requests,
        concurrency: cli.concurrency,
        method: cli.method,
        body: cli.body,
    };

    let report = match bench::run(&plan).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "Load run failed");
            return Err(e.into());
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
