use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub aws_region: String,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Artifact storage
    pub s3_bucket_name: String,
    // Speech provider
    pub azure_secret_name: String,
    pub speech_endpoint: Option<String>,
    // CORS
    pub alb_dns_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()?,
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            s3_bucket_name: env::var("S3_BUCKET_NAME")
                .map_err(|_| "S3_BUCKET_NAME must be set")?,
            azure_secret_name: env::var("AZURE_SECRET_NAME")
                .unwrap_or_else(|_| "azure-secrets".to_string()),
            speech_endpoint: optional_var("SPEECH_ENDPOINT"),
            alb_dns_name: optional_var("ALB_DNS_NAME"),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Browser origins allowed to call the API
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins = vec!["http://localhost:8000".to_string()];
        if let Some(dns) = &self.alb_dns_name {
            origins.push(format!("http://{}", dns));
        }
        origins
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
