use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use inquiry_desk::config::AppConfig;
use inquiry_desk::services::agent::bedrock::BedrockAgent;
use inquiry_desk::services::notifier::lambda::LambdaNotifier;
use inquiry_desk::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    config.validate()?;

    if config.has_static_credentials() {
        tracing::info!(region = %config.aws_region, "using static AWS credentials");
    } else {
        tracing::info!(region = %config.aws_region, "using default AWS credential chain");
    }
    let sdk_config = config.load_sdk_config().await;

    let answerer = BedrockAgent::new(
        &sdk_config,
        config.agent_id.clone(),
        config.agent_alias_id.clone(),
    );
    let notifier = LambdaNotifier::new(&sdk_config, config.notifier_function_name.clone());
    tracing::info!(
        agent_id = %config.agent_id,
        agent_alias_id = %config.agent_alias_id,
        function = %config.notifier_function_name,
        "remote collaborators configured"
    );

    let state = Arc::new(AppState {
        config,
        answerer: Box::new(answerer),
        notifier: Box::new(notifier),
    });

    tracing::debug!(config = ?state.config, "application state ready");
    let addr = format!("0.0.0.0:{}", state.config.port);

    let app = inquiry_desk::build_router(state);

    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
