use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::error::ScorecardError;
use crate::model::COURSE_INFO;
use crate::mvu::run_scorecard;
use crate::mvu::scorecard::{ScorecardModel, decode_action, want_json};
use crate::view::index::render_index_template;
use crate::view::scorecard::render_scorecard_app;

/// The one in-memory session shared by every request.
pub type SharedScorecard = Data<Mutex<ScorecardModel>>;

#[must_use]
pub fn new_shared_scorecard(player_name: &str) -> SharedScorecard {
    Data::new(Mutex::new(ScorecardModel::new(player_name)))
}

/// Registers the scorecard routes; mount under a scope to serve from a sub path.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/scorecard", web::get().to(scorecard))
        .route("/scorecard/action", web::post().to(scorecard_action))
        .route("/health", web::get().to(HttpResponse::Ok));
}

pub async fn index() -> impl Responder {
    let markup = render_index_template(COURSE_INFO.name);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

/// # Errors
///
/// Returns `SessionUnavailable` if the session lock is poisoned.
pub async fn scorecard(
    query: web::Query<HashMap<String, String>>,
    state: SharedScorecard,
) -> Result<HttpResponse, ScorecardError> {
    let model = state.lock()?;
    Ok(respond(&model, want_json(&query.0)))
}

/// Decodes one user intent, applies it to the session and returns the re-rendered app.
///
/// A refused intent (e.g. `+` at ten strokes) is not an http error: the unchanged state is
/// rendered with a notice.
///
/// # Errors
///
/// Returns a 400 `ScorecardError` when the query cannot be decoded into an intent, or
/// `SessionUnavailable` if the session lock is poisoned.
pub async fn scorecard_action(
    query: web::Query<HashMap<String, String>>,
    state: SharedScorecard,
) -> Result<HttpResponse, ScorecardError> {
    let mut model = state.lock()?;
    let msg = decode_action(&query.0, &model).inspect_err(|e| {
        warn!(error = %e, query = ?query.0, "could not decode scorecard action");
    })?;
    if let Err(e) = run_scorecard(&mut model, msg) {
        debug!(error = %e, "rendering refusal notice");
    }
    Ok(respond(&model, want_json(&query.0)))
}

fn respond(model: &ScorecardModel, json: bool) -> HttpResponse {
    if json {
        HttpResponse::Ok().json(model.snapshot())
    } else {
        HttpResponse::Ok()
            .content_type("text/html")
            .body(render_scorecard_app(model).into_string())
    }
}
