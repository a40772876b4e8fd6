//! `tessera serve` — Start the HTTP gateway.

use tessera_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("Tessera");
    println!("   Listening: {}:{}", config.gateway.host, config.gateway.port);
    println!("   Provider:  {}", config.provider);
    println!("   Model:     {}", config.model);
    if !config.has_api_key() {
        println!("   No API key configured — replies come from the echo client");
    }

    tessera_gateway::start(config).await?;

    Ok(())
}
