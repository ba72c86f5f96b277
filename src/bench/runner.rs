//! Concurrent request runner.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use reqwest::Method;
use thiserror::Error;

use crate::bench::report::{LoadReport, Sample};

/// Error type for load runs.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("invalid load plan: {0}")]
    InvalidPlan(&'static str),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// What to send, how many times, and how many at once.
#[derive(Debug, Clone)]
pub struct LoadPlan {
    pub url: String,
    pub requests: usize,
    pub concurrency: usize,
    pub method: Method,
    pub body: Option<String>,
}

impl LoadPlan {
    fn validate(&self) -> Result<(), BenchError> {
        if self.requests == 0 {
            return Err(BenchError::InvalidPlan("requests must be at least 1"));
        }
        if self.concurrency == 0 {
            return Err(BenchError::InvalidPlan("concurrency must be at least 1"));
        }
        Ok(())
    }
}

/// Run the plan to completion and summarize it.
pub async fn run(plan: &LoadPlan) -> Result<LoadReport, BenchError> {
    plan.validate()?;

    let workers = plan.concurrency.min(plan.requests);
    let client = reqwest::Client::builder()
        .no_proxy()
        .pool_max_idle_per_host(workers)
        .build()?;
    let plan = Arc::new(plan.clone());
    let claimed = Arc::new(AtomicUsize::new(0));

    tracing::info!(
        url = %plan.url,
        method = %plan.method,
        requests = plan.requests,
        workers,
        "Starting load run"
    );

    let start = Instant::now();
    let mut tasks = Vec::with_capacity(workers);
    for _ in 0..workers {
        let client = client.clone();
        let plan = plan.clone();
        let claimed = claimed.clone();
        tasks.push(tokio::spawn(async move {
            let mut samples = Vec::new();
            while claimed.fetch_add(1, Ordering::Relaxed) < plan.requests {
                samples.push(send_one(&client, &plan).await);
            }
            samples
        }));
    }

    let mut samples = Vec::with_capacity(plan.requests);
    for task in tasks {
        samples.extend(task.await?);
    }
    let report = LoadReport::from_samples(&samples, start.elapsed());

    tracing::info!(
        succeeded = report.succeeded,
        failed = report.failed,
        elapsed = ?report.elapsed,
        "Load run finished"
    );
    Ok(report)
}

async fn send_one(client: &reqwest::Client, plan: &LoadPlan) -> Sample {
    let started = Instant::now();

    let mut request = client.request(plan.method.clone(), &plan.url);
    if let Some(body) = &plan.body {
        request = request.body(body.clone());
    }

    let status = match request.send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            // Drain the body so the connection goes back to the pool.
            match response.bytes().await {
                Ok(_) => Some(status),
                Err(e) => {
                    tracing::debug!(error = %e, "Failed reading response body");
                    None
                }
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "Request failed");
            None
        }
    };

    Sample {
        latency: started.elapsed(),
        status,
    }
}
