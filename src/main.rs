mod config;
mod karen;
mod voice;
mod web;

use actix_web::{App, HttpServer, web::Data};
use actix_files as fs;
use dotenv::dotenv;
use log::{info, warn, error};
use std::sync::Arc;
use tera::Tera;

use config::AppConfig;
use karen::SpeechDispatcher;
use voice::ElevenLabsClient;
use web::routes;

// App state structure
struct AppState {
    tera: Tera,
    dispatcher: SpeechDispatcher,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Karen call simulator");

    let config = AppConfig::from_env();
    if config.api_key.is_none() {
        warn!("ELEVENLABS_API_KEY not set! Voice generation will fail.");
    }

    let synthesizer = match ElevenLabsClient::new(&config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("Failed to initialize ElevenLabs client: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize template engine
    let mut tera = match Tera::new(&format!("{}/**/*", config.template_dir)) {
        Ok(t) => t,
        Err(e) => {
            error!("Template parsing error: {}", e);
            std::process::exit(1);
        }
    };
    tera.autoescape_on(vec![".html"]);

    // Create app state
    let app_state = Data::new(AppState {
        tera,
        dispatcher: SpeechDispatcher::new(synthesizer, &config.voice_id, &config.model_id),
    });

    info!("Listening on {}:{}", config.host, config.port);

    // Start web server
    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure)
            .service(fs::Files::new("/static", &static_dir))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
