//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use sentiment_ai::adapters::ai::{GeminiAdapter, MockAiAdapter, OpenAiAdapter};
use sentiment_ai::adapters::ui::tui::TuiInputPort;
use sentiment_ai::ports::{AiPort, InputPort};
use sentiment_ai::shared::config::{AppConfig, Provider};
use sentiment_ai::usecases::AnalysisService;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    // Logs go to stderr at `warn` by default so they do not interleave with the prompts.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config load failed, using defaults");
        AppConfig::default()
    });
    let provider = cfg.provider().map_err(|e| anyhow::anyhow!("{}", e))?;

    let ai: Arc<dyn AiPort> = match provider {
        Provider::Gemini => {
            info!(model = %cfg.model_or_default(provider), "using Gemini adapter");
            Arc::new(GeminiAdapter::new(
                cfg.api_url_or_default(provider),
                cfg.api_key().unwrap_or_default(),
                cfg.model_or_default(provider),
            ))
        }
        Provider::OpenAi => {
            info!(
                model = %cfg.model_or_default(provider),
                url = %cfg.api_url_or_default(provider),
                "using OpenAI-compatible adapter"
            );
            Arc::new(OpenAiAdapter::new(
                cfg.api_url_or_default(provider),
                cfg.api_key().unwrap_or_default(),
                cfg.model_or_default(provider),
            ))
        }
        Provider::Mock => {
            if cfg.is_mock_fallback().map_err(|e| anyhow::anyhow!("{}", e))? {
                warn!(
                    requested = ?cfg.requested_provider().ok(),
                    "no API key set (SENTIMENT_AI_API_KEY / GEMINI_API_KEY / API_KEY), using mock AI adapter"
                );
            }
            Arc::new(MockAiAdapter::with_delay(cfg.mock_delay_ms_or_default()))
        }
    };

    let service = Arc::new(AnalysisService::new(ai));
    let interactive = std::io::stdin().is_terminal();
    if interactive {
        sentiment_ai::adapters::ui::init_ui(service.provider());
    }

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(service, interactive));

    if let Err(e) = input_port.run().await {
        // The user already saw the collapsed message; keep the detail in the log.
        debug!(error = %e, "run finished with error");
        std::process::exit(1);
    }

    Ok(())
}
