use std::time::Duration;

use servicospro_client::app::{App, HostEvent};
use servicospro_client::config::ClientConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

const RENDER_INTERVAL_MS: u64 = 500;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "page runtime failed to start");
            std::process::exit(1);
        }
    };

    let (attr, theme) = app.theme().document_attribute();
    tracing::info!(base_url = %app.config().base_url, attr, theme, "page runtime ready");

    let poller = app.start();
    let mut theme_changes = app.theme().subscribe();
    let mut render = tokio::time::interval(Duration::from_millis(RENDER_INTERVAL_MS));
    let mut last_badges = app.badges().snapshot();

    // One host event per stdin line: `theme`, `online`, `offline`.
    let mut events = BufReader::new(tokio::io::stdin()).lines();
    let mut events_open = true;

    loop {
        tokio::select! {
            _ = render.tick() => {
                for toast in app.toasts().drain() {
                    tracing::info!(kind = toast.kind.as_str(), message = %toast.message, "toast");
                }
                let badges = app.badges().snapshot();
                if badges != last_badges {
                    for badge in &badges {
                        tracing::info!(selector = %badge.selector, text = %badge.text, visible = badge.visible, "badge");
                    }
                    last_badges = badges;
                }
            }
            line = events.next_line(), if events_open => {
                match line {
                    Ok(Some(line)) if line.trim().is_empty() => {}
                    Ok(Some(line)) => match line.parse::<HostEvent>() {
                        Ok(event) => {
                            if let Err(e) = app.handle(event) {
                                tracing::error!(error = %e, ?event, "host event failed");
                            }
                        }
                        Err(e) => tracing::warn!(error = %e, "ignoring host input"),
                    },
                    Ok(None) => events_open = false,
                    Err(e) => {
                        tracing::warn!(error = %e, "host input closed");
                        events_open = false;
                    }
                }
            }
            Ok(theme) = theme_changes.recv() => {
                tracing::info!(%theme, "theme changed");
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                break;
            }
        }
    }

    poller.stop();
}
