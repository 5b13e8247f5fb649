use audio_generation_backend::controllers::dubbing::DubbingController;
use audio_generation_backend::domain::dubbing::DubbingService;
use audio_generation_backend::infrastructure::config::{Config, LogFormat};
use audio_generation_backend::infrastructure::http::start_http_server;
use audio_generation_backend::infrastructure::repositories::{
    AzureSpeechRepository, S3ArtifactRepository, SecretsManagerRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting Audio Generation API on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        s3_bucket_name = %config.s3_bucket_name,
        aws_region = %config.aws_region,
        alb_dns_name = ?config.alb_dns_name,
        azure_secret_name = %config.azure_secret_name,
        "Resolved deployment settings"
    );

    if !config.is_development() && config.speech_endpoint.is_some() {
        tracing::warn!(
            speech_endpoint = ?config.speech_endpoint,
            "Speech provider endpoint overridden in production"
        );
    }

    // AWS clients share one configuration; credentials come from the default
    // provider chain (environment, profile, task role)
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()))
        .load()
        .await;
    tracing::info!(region = ?aws_config.region(), "AWS configuration loaded");

    let s3_client = Arc::new(aws_sdk_s3::Client::new(&aws_config));
    let secrets_client = Arc::new(aws_sdk_secretsmanager::Client::new(&aws_config));

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    tracing::info!("Instantiating repositories...");
    let artifact_repo = Arc::new(S3ArtifactRepository::new(
        s3_client,
        config.s3_bucket_name.clone(),
    ));
    let secret_repo = Arc::new(SecretsManagerRepository::new(secrets_client));
    let speech_repo = Arc::new(AzureSpeechRepository::new(config.speech_endpoint.clone()));

    // 2. Instantiate services
    tracing::info!("Instantiating services...");
    let dubbing_service = Arc::new(DubbingService::new(
        artifact_repo,
        secret_repo,
        speech_repo,
        config.azure_secret_name.clone(),
    ));

    // 3. Instantiate controllers
    tracing::info!("Instantiating controllers...");
    let dubbing_controller = Arc::new(DubbingController::new(dubbing_service));

    start_http_server(config, dubbing_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "audio_generation_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
