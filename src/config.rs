use clap::Parser;

// CLI argument structure; every flag can also come from the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "edge-gateway")]
#[command(about = "API gateway with rate limiting and request proxying")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 8005)]
    pub port: u16,

    // Upstream base URLs, one per known service
    #[arg(long, env = "SENSOR_INGESTION_URL", default_value = "http://localhost:8001")]
    pub sensor_ingestion_url: String,

    #[arg(long, env = "DATA_PROCESSOR_URL", default_value = "http://localhost:8002")]
    pub data_processor_url: String,

    #[arg(long, env = "DEVICE_REGISTRY_URL", default_value = "http://localhost:8003")]
    pub device_registry_url: String,

    #[arg(long, env = "ALERT_MANAGER_URL", default_value = "http://localhost:8004")]
    pub alert_manager_url: String,

    // Rate limit max requests per window
    #[arg(long, env = "RATE_LIMIT", default_value_t = 100)]
    pub rate_limit: u32,

    // Rate limit window in seconds
    #[arg(long, env = "RATE_WINDOW", default_value_t = 60)]
    pub rate_window: u64,
}
