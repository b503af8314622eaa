use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::{debug, error, info, warn};
use serde_json::json;
use tera::Context;
use uuid::Uuid;

use crate::karen::Mood;
use crate::web::models::{AckResponse, ErrorResponse, KarenRequest, MoodOption};
use crate::AppState;

const AUDIO_FILE_NAME: &str = "karen_response.mp3";
// Anything bigger is not a turn description; it falls back to the defaults
const MAX_TURN_BODY_BYTES: usize = 64 * 1024;

// Index page handler
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    let mut context = Context::new();
    let moods: Vec<MoodOption> = Mood::ALL.into_iter().map(MoodOption::from).collect();
    context.insert("moods", &moods);
    match data.tera.render("index.html", &context) {
        Ok(html) => HttpResponse::Ok().content_type("text/html").body(html),
        Err(e) => {
            error!("Template error: {}", e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Karen speaks: pick a line, synthesize it, send back the mp3
pub async fn get_karen_response(data: web::Data<AppState>, payload: web::Payload) -> impl Responder {
    let request_id = Uuid::new_v4();
    let body = match payload.to_bytes_limited(MAX_TURN_BODY_BYTES).await {
        Ok(Ok(body)) => body,
        Ok(Err(e)) => {
            warn!("[{}] Failed to read request body, using defaults: {}", request_id, e);
            web::Bytes::new()
        }
        Err(_) => {
            warn!(
                "[{}] Request body over {} bytes, using defaults",
                request_id, MAX_TURN_BODY_BYTES
            );
            web::Bytes::new()
        }
    };
    let turn = KarenRequest::from_body(&body).into_turn();

    info!(
        "[{}] Generating response for mood: {} (intro: {})",
        request_id, turn.mood, turn.is_intro
    );
    debug!("[{}] User said: {:?}", request_id, turn.last_user_response);

    // ThreadRng is not Send, keep it out of the await below
    let speech = {
        let mut rng = rand::thread_rng();
        data.dispatcher.compose(&turn, &mut rng)
    };
    info!("[{}] Selected response: {}", request_id, speech.text);

    match data.dispatcher.speak(&speech).await {
        Ok(audio) => HttpResponse::Ok()
            .content_type("audio/mpeg")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(AUDIO_FILE_NAME.to_string())],
            })
            .body(audio),
        Err(e) => {
            error!("[{}] Error generating audio: {}", request_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

// The caller's turn is acknowledged but not stored
pub async fn process_response(req: HttpRequest) -> impl Responder {
    acknowledge(&req, "Response processed!")
}

pub async fn save_recording(req: HttpRequest) -> impl Responder {
    acknowledge(&req, "Recording saved!")
}

fn acknowledge(req: &HttpRequest, message: &'static str) -> HttpResponse {
    debug!(
        "Acknowledging {} (content-length: {:?})",
        req.path(),
        req.headers().get("content-length")
    );
    HttpResponse::Ok().json(AckResponse {
        status: "success",
        message,
    })
}
