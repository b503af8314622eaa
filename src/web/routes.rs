use actix_web::web;
use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health_check))
        .route("/get-karen-response", web::post().to(handlers::get_karen_response))
        .route("/process-response", web::post().to(handlers::process_response))
        .route("/save-recording", web::post().to(handlers::save_recording));
}
