mod config;
mod routes;

use leptos::prelude::get_configuration;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let options = get_configuration(None).expect("leptos configuration").leptos_options;

    let addr = config.bind_addr(options.site_addr);
    let site_root = config.site_root(&options.site_root);
    let app = routes::app(options, &site_root);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, site_root = %site_root.display(), "meme-gallery listening");
    axum::serve(listener, app).await.expect("server failed");
}
