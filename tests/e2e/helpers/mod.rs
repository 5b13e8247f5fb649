use audio_generation_backend::{
    controllers::dubbing::DubbingController,
    domain::dubbing::DubbingService,
    infrastructure::{
        config::{Config, Environment, LogFormat},
        http::build_router,
    },
};
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod api_client;
pub mod fakes;

use api_client::TestClient;
use fakes::{InMemoryArtifactRepository, StaticSecretRepository, StubSpeechRepository, FAKE_BUCKET};

pub struct TestContext {
    pub client: TestClient,
    pub artifacts: Arc<InMemoryArtifactRepository>,
    pub speech: Arc<StubSpeechRepository>,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let config = test_config();

            let artifacts = Arc::new(InMemoryArtifactRepository::default());
            let speech = Arc::new(StubSpeechRepository::new());
            let dubbing_service = Arc::new(DubbingService::new(
                artifacts.clone(),
                Arc::new(StaticSecretRepository),
                speech.clone(),
                config.azure_secret_name.clone(),
            ));
            let app = build_router(&config, Arc::new(DubbingController::new(dubbing_service)));

            // Start server
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            Self {
                client: TestClient::new(&format!("http://{}", addr)),
                artifacts,
                speech,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {}
    }
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        aws_region: "us-east-1".to_string(),
        environment: Environment::Development,
        log_format: LogFormat::Pretty,
        s3_bucket_name: FAKE_BUCKET.to_string(),
        azure_secret_name: "azure-secrets".to_string(),
        speech_endpoint: None,
        alb_dns_name: Some("test-alb.example.com".to_string()),
    }
}

pub const FRENCH_TRANSCRIPT: &str = "Speaker,Time Markers,EN--Transcription,FR--Transcription\n\
                                     spk_0,0:00,Good morning [PH 0:00:01],Bonjour\n\
                                     spk_1,0:03,How are you?,Comment allez-vous ?\n\
                                     spk_0,0:03,,\n\
                                     spk_0,0:10,Very well,Très bien\n";

pub const HINDI_TRANSCRIPT: &str = "Speaker,Time Markers,EN--Transcription,IN--Transcription\n\
                                    spk_0,0:00,I am going to the market today,मैं आज बाज़ार जा रहा हूँ क्योंकि मुझे कुछ सब्ज़ियाँ खरीदनी हैं।\n\
                                    spk_1,0:06,Bring some mangoes too,कुछ आम भी ले आना\n";
