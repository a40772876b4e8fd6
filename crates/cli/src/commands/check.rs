//! `tessera check` — Diagnose configuration and provider reachability.

use tessera_config::AppConfig;
use tessera_core::generation::GenerationClient as _;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Tessera Check");
    println!("=============\n");

    let mut issues = 0;

    let config_path = AppConfig::config_dir().join("config.toml");
    if !config_path.exists() {
        println!("  no config file, using defaults — run `tessera init` to create one");
    }

    let config = match AppConfig::load() {
        Ok(config) => {
            println!("  ok: configuration valid");
            config
        }
        Err(e) => {
            println!("  error: configuration invalid: {e}");
            return Err(e.into());
        }
    };

    if config.has_api_key() {
        println!("  ok: API key configured (provider: {})", config.provider);
    } else {
        println!("  warn: no API key — the gateway will serve echo replies");
        issues += 1;
    }

    println!("  model: {}", config.model);
    match config.chat.window() {
        Some(window) => println!("  history window: last {window} turns"),
        None => println!("  history window: unbounded"),
    }

    let client = tessera_providers::build_from_config(&config);
    match client.health_check().await {
        Ok(true) => println!("  ok: provider '{}' reachable", client.name()),
        Ok(false) => {
            println!("  warn: provider '{}' reported unhealthy", client.name());
            issues += 1;
        }
        Err(e) => {
            println!("  error: provider '{}' unreachable: {e}", client.name());
            issues += 1;
        }
    }

    println!();
    if issues == 0 {
        println!("  all checks passed");
    } else {
        println!("  {issues} issue(s) found, see above");
    }

    Ok(())
}
