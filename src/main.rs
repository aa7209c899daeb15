use clap::Parser;
use page_audit::config::AuditConfig;
use page_audit::server;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match AuditConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config from {}: {}", path.display(), e);
                return;
            }
        },
        None => AuditConfig::default(),
    };

    // Environment overrides apply on top of the file, CLI flags on top of both
    config.apply_env_overrides();
    if let Some(port) = args.port {
        config.listen_port = port;
    }
    if let Some(webdriver_url) = args.webdriver_url {
        config.webdriver_url = webdriver_url;
    }

    println!("Note: page previews require a WebDriver server (e.g. chromedriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    if config.pagespeed_api_key.is_none() {
        ::log::warn!("No page speed API key configured; page speed lookups will fail");
    }

    ::log::info!("Starting audit service on port {}", config.listen_port);

    if let Err(e) = server::serve(config).await {
        ::log::error!("Server failed: {}", e);
    }
}
