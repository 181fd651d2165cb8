use lambda_runtime::service_fn;
use tracing_subscriber::EnvFilter;

use chatrelay_lambda::config::Config;
use chatrelay_lambda::handler;
use chatrelay_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env();
    let state = AppState::new(&config)?;

    tracing::info!(
        endpoint = %config.api_url,
        timeout_secs = config.timeout.as_secs(),
        "chatrelay initialized"
    );

    let state = &state;
    lambda_runtime::run(service_fn(move |event| async move {
        handler::function_handler(state, event).await
    }))
    .await
    .map_err(|e| eyre::eyre!(e))
}
