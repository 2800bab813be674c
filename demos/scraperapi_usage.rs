//! ScraperAPI Tools Usage Example
//!
//! This example demonstrates the ScraperAPI tools:
//! - ScraperApiTool - Fetch a page as HTML, text or markdown
//! - ScraperApiGoogleSearchTool - Structured Google search results
//! - ScraperApiAmazonSearchTool - Structured Amazon search results
//!
//! ## 🔑 Authentication
//!
//! Configure the key in config.toml:
//! ```toml
//! [scraperapi]
//! api_key = "${SCRAPERAPI_API_KEY}"
//! ```
//!
//! Or export it (a `.env` file works too):
//! ```bash
//! export SCRAPERAPI_API_KEY="your-key"
//! cargo run --example scraperapi_usage
//! ```

use serde_json::json;
use std::sync::Arc;
use zdk_core::{Tool, ToolContext, Toolset, ZConfig};
use zdk_scraperapi::ScraperApiToolkit;
use zdk_telemetry::TelemetryOptions;
use zdk_tool::DefaultToolContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Fall back to environment only when no config.toml is around
    let config = ZConfig::load().unwrap_or_else(|e| {
        println!("ℹ️  {} - using environment variables", e);
        ZConfig::from_env()
    });

    let observability = &config.observability;
    let mut telemetry = TelemetryOptions::default().json_logs(observability.json_logs);
    if let Some(name) = &observability.service_name {
        telemetry = telemetry.service_name(name);
    }
    if let Some(filter) = &observability.log_filter {
        telemetry = telemetry.log_filter(filter);
    }
    zdk_telemetry::init_telemetry_with(telemetry);

    println!("🕷️  ZDK ScraperAPI Tools Example");
    println!("===============================\n");

    let toolkit = ScraperApiToolkit::from_config(&config)?;
    let tools = toolkit.get_tools().await?;

    println!("📦 Loaded {} tools from toolset '{}':", tools.len(), toolkit.name());
    for tool in &tools {
        println!("  ✓ {} - {}", tool.name(), tool.description());
    }
    println!();

    let calls = [
        (
            "scraperapi",
            json!({"url": "https://example.com", "output_format": "markdown"}),
        ),
        (
            "scraperapi_google_search",
            json!({"query": "rust async runtime", "num": 3}),
        ),
        (
            "scraperapi_amazon_search",
            json!({"query": "mechanical keyboard", "page": 1}),
        ),
    ];

    for (i, (name, args)) in calls.into_iter().enumerate() {
        let Some(tool) = tools.iter().find(|t| t.name() == name) else {
            continue;
        };
        let ctx: Arc<dyn ToolContext> =
            Arc::new(DefaultToolContext::new(format!("call-{}", i), "demo"));

        println!("🔧 {} {}", name, args);
        match tool.execute(ctx, args).await {
            Ok(response) => {
                let rendered = match response.result.as_str() {
                    Some(text) => text.to_string(),
                    None => serde_json::to_string_pretty(&response.result)?,
                };
                let preview: String = rendered.chars().take(400).collect();
                println!("{}\n", preview);
            }
            Err(e) => println!("❌ {}\n", e),
        }
    }

    Ok(())
}
