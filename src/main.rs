use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use floodcast::handlers;
use floodcast::{AppState, FloodClient, FloodClientConfig, Predictor};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("{}:{}", host, port);

    // Load the model artifact
    let model_path = std::env::var("MODEL_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("models/flood_model.onnx"));

    let predictor = match Predictor::load(&model_path) {
        Ok(p) => {
            info!("Model artifact loaded from {:?}", model_path);
            Some(Mutex::new(p))
        }
        Err(e) => {
            warn!(
                "Failed to load model artifact: {}. Predictions will be unavailable.",
                e
            );
            None
        }
    };

    let app_state = Arc::new(AppState {
        predictor,
        weather: FloodClient::new(FloodClientConfig::default()),
    });

    info!("Starting flood prediction API server at http://{}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            .configure(handlers::configure)
    })
    .bind(&addr)?
    .run()
    .await
}
