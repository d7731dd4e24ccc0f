use crate::controller::backend::DartsApi;
use crate::controller::play::engine::{self, PlayError, PlayState, PlayStates};
use crate::model::{Ident, ThrowCode};
use crate::view::history::render_history;
use crate::view::play::{InputView, render_play_screen};
use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use function_name::named;
use serde_json::json;
use std::collections::HashMap;

/// Loads a match and fills in display names. A missing name only costs the
/// label, so a roster failure does not sink the load.
pub async fn load_with_names(api: &dyn DartsApi, match_id: &str) -> Result<PlayState, PlayError> {
    let (players, loaded) = futures::join!(api.list_players(), engine::load_match(api, match_id));
    let mut state = loaded?;
    match players {
        Ok(list) => {
            state.names = list.into_iter().map(|p| (p.id, p.name)).collect();
        }
        Err(e) => eprintln!("player names unavailable: {e}"),
    }
    Ok(state)
}

fn match_param(query: &HashMap<String, String>) -> Option<Ident> {
    query.get("match").map(String::as_str).and_then(Ident::new)
}

/// GET `/play?match=<id>&view=<grid|board>`. Always re-fetches the match,
/// so resuming and toggling the input both land on service truth.
#[named]
pub async fn play_screen(
    query: web::Query<HashMap<String, String>>,
    api: Data<dyn DartsApi>,
    states: Data<PlayStates>,
) -> impl Responder {
    let Some(match_id) = match_param(&query) else {
        return HttpResponse::BadRequest().json(json!({"error": "match parameter is required"}));
    };
    let input = InputView::from_query(query.get("view").map(String::as_str));

    let state = match load_with_names(api.get_ref(), match_id.value()).await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}: {e}", function_name!());
            return HttpResponse::BadGateway().json(json!({"error": e.to_string()}));
        }
    };
    let markup = render_play_screen(&state, input);
    states
        .write()
        .await
        .insert(match_id.value().to_string(), state);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

/// POST `/play/throw?match=<id>&code=<1..62>&view=<grid|board>`. The
/// registry lock stays held across the round trip so a second click cannot
/// interleave with an open one.
#[named]
pub async fn play_throw(
    query: web::Query<HashMap<String, String>>,
    api: Data<dyn DartsApi>,
    states: Data<PlayStates>,
) -> impl Responder {
    let Some(match_id) = match_param(&query) else {
        return HttpResponse::BadRequest().json(json!({"error": "match parameter is required"}));
    };
    let code = match query
        .get("code")
        .and_then(|v| v.parse::<u8>().ok())
        .map(ThrowCode::try_from)
    {
        Some(Ok(code)) => code,
        _ => {
            return HttpResponse::BadRequest().json(json!({"error": "invalid throw code"}));
        }
    };
    let input = InputView::from_query(query.get("view").map(String::as_str));

    let mut registry = states.write().await;
    if !registry.contains_key(match_id.value()) {
        match load_with_names(api.get_ref(), match_id.value()).await {
            Ok(state) => {
                registry.insert(match_id.value().to_string(), state);
            }
            Err(e) => {
                eprintln!("{}: {e}", function_name!());
                return HttpResponse::BadGateway().json(json!({"error": e.to_string()}));
            }
        }
    }
    let Some(state) = registry.get_mut(match_id.value()) else {
        return HttpResponse::BadGateway().json(json!({"error": "match state unavailable"}));
    };
    if let Err(e) = engine::submit_throw(api.get_ref(), state, code).await {
        eprintln!("{}: {e}", function_name!());
        return HttpResponse::BadGateway().json(json!({"error": e.to_string()}));
    }
    let markup = render_play_screen(state, input);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

/// GET `/play/history?match=<id>`. Refreshes the throw log from the
/// service; when that fails the last known log is rendered and the
/// failure surfaces through the banner.
#[named]
pub async fn play_history(
    query: web::Query<HashMap<String, String>>,
    api: Data<dyn DartsApi>,
    states: Data<PlayStates>,
) -> impl Responder {
    let Some(match_id) = match_param(&query) else {
        return HttpResponse::BadRequest().json(json!({"error": "match parameter is required"}));
    };
    let mut registry = states.write().await;
    if !registry.contains_key(match_id.value()) {
        match load_with_names(api.get_ref(), match_id.value()).await {
            Ok(state) => {
                registry.insert(match_id.value().to_string(), state);
            }
            Err(e) => {
                eprintln!("{}: {e}", function_name!());
                return HttpResponse::BadGateway().json(json!({"error": e.to_string()}));
            }
        }
    }
    let Some(state) = registry.get_mut(match_id.value()) else {
        return HttpResponse::BadGateway().json(json!({"error": "match state unavailable"}));
    };
    if let Err(e) = engine::refresh_history(api.get_ref(), state).await {
        eprintln!("{}: history refresh failed: {e}", function_name!());
    }
    let markup = render_history(state);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
