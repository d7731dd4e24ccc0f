use crate::controller::backend::DartsApi;
use crate::controller::play::engine::PlayStates;
use crate::controller::play::http_handlers::load_with_names;
use crate::controller::transport::ApiContext;
use crate::model::{CreateMatch, Ident};
use crate::view::index::render_banner;
use crate::view::logs::render_logs_screen;
use crate::view::matches::render_matches_screen;
use crate::view::play::{InputView, render_play_screen};
use crate::view::players::render_players_screen;
use crate::view::start::{StartOptions, render_start_options, render_start_screen};
use crate::view::stats::render_stats_screen;
use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use ahash::RandomState;
use function_name::named;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;

/// GET `/start`. Query parameters carry the current option picks so the
/// cycler buttons can round-trip them.
#[named]
pub async fn start_screen(
    query: web::Query<HashMap<String, String>>,
    api: Data<dyn DartsApi>,
) -> impl Responder {
    let options = StartOptions::from_query(&query);
    match api.list_players().await {
        Ok(players) => HttpResponse::Ok()
            .content_type("text/html")
            .body(render_start_screen(&players, &options).into_string()),
        Err(e) => {
            eprintln!("{}: {e}", function_name!());
            HttpResponse::BadGateway().json(json!({"error": e.to_string()}))
        }
    }
}

/// GET `/start/options`. Fragment swap for one cycler click.
pub async fn start_options(query: web::Query<HashMap<String, String>>) -> impl Responder {
    let options = StartOptions::from_query(&query);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(render_start_options(&options).into_string())
}

async fn render_players(api: &dyn DartsApi, label: &str) -> HttpResponse {
    match api.list_players().await {
        Ok(players) => HttpResponse::Ok()
            .content_type("text/html")
            .body(render_players_screen(&players).into_string()),
        Err(e) => {
            eprintln!("{label}: {e}");
            HttpResponse::BadGateway().json(json!({"error": e.to_string()}))
        }
    }
}

#[named]
pub async fn players_screen(api: Data<dyn DartsApi>) -> impl Responder {
    render_players(api.get_ref(), function_name!()).await
}

#[derive(Deserialize)]
pub struct NewPlayerForm {
    pub name: String,
}

/// POST `/players/create`. Responds with the refreshed players screen.
#[named]
pub async fn players_create(
    form: web::Form<NewPlayerForm>,
    api: Data<dyn DartsApi>,
) -> impl Responder {
    let name = form.name.trim();
    if name.is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "name is required"}));
    }
    if let Err(e) = api.create_player(name).await {
        eprintln!("{}: {e}", function_name!());
        return HttpResponse::BadGateway().json(json!({"error": e.to_string()}));
    }
    render_players(api.get_ref(), function_name!()).await
}

/// POST `/players/delete?player=<id>`.
#[named]
pub async fn players_delete(
    query: web::Query<HashMap<String, String>>,
    api: Data<dyn DartsApi>,
) -> impl Responder {
    let Some(player_id) = query.get("player").map(String::as_str).and_then(Ident::new) else {
        return HttpResponse::BadRequest().json(json!({"error": "player parameter is required"}));
    };
    if let Err(e) = api.delete_player(player_id.value()).await {
        eprintln!("{}: {e}", function_name!());
        return HttpResponse::BadGateway().json(json!({"error": e.to_string()}));
    }
    render_players(api.get_ref(), function_name!()).await
}

async fn render_matches(api: &dyn DartsApi, label: &str) -> HttpResponse {
    let (matches, players) = futures::join!(api.list_matches(), api.list_players());
    match matches {
        Ok(list) => {
            let names: HashMap<String, String> = players
                .map(|ps| ps.into_iter().map(|p| (p.id, p.name)).collect())
                .unwrap_or_default();
            HttpResponse::Ok()
                .content_type("text/html")
                .body(render_matches_screen(&list, &names).into_string())
        }
        Err(e) => {
            eprintln!("{label}: {e}");
            HttpResponse::BadGateway().json(json!({"error": e.to_string()}))
        }
    }
}

#[named]
pub async fn matches_screen(api: Data<dyn DartsApi>) -> impl Responder {
    render_matches(api.get_ref(), function_name!()).await
}

/// Order by a randomly seeded hash.
fn shuffle(pids: &mut [String]) {
    let hasher = RandomState::new();
    pids.sort_by_key(|pid| hasher.hash_one(pid));
}

/// POST `/matches/create`. The form repeats `pid` once per picked player;
/// on success the response is the play screen for the new match.
#[named]
pub async fn matches_create(
    form: web::Form<Vec<(String, String)>>,
    api: Data<dyn DartsApi>,
    states: Data<PlayStates>,
) -> impl Responder {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut pids: Vec<String> = Vec::new();
    for (key, value) in form.into_inner() {
        if key == "pid" {
            pids.push(value);
        } else {
            fields.insert(key, value);
        }
    }
    if pids.is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "pick at least one player"}));
    }
    if pids.iter().any(|pid| Ident::new(pid).is_none()) {
        return HttpResponse::BadRequest().json(json!({"error": "invalid pid(s)"}));
    }
    let options = StartOptions::from_query(&fields);
    if options.random_order {
        shuffle(&mut pids);
    }
    let req = CreateMatch {
        pids,
        start_at: options.start_at,
        start_mode: options.start_mode.number(),
        end_mode: options.end_mode.number(),
    };
    let created = match api.create_match(&req).await {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}: {e}", function_name!());
            return HttpResponse::BadGateway().json(json!({"error": e.to_string()}));
        }
    };
    let state = match load_with_names(api.get_ref(), &created.id).await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}: {e}", function_name!());
            return HttpResponse::BadGateway().json(json!({"error": e.to_string()}));
        }
    };
    let markup = render_play_screen(&state, InputView::Grid);
    states.write().await.insert(created.id.clone(), state);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

/// POST `/matches/delete?match=<id>`. Drops any cached play state with it.
#[named]
pub async fn matches_delete(
    query: web::Query<HashMap<String, String>>,
    api: Data<dyn DartsApi>,
    states: Data<PlayStates>,
) -> impl Responder {
    let Some(match_id) = query.get("match").map(String::as_str).and_then(Ident::new) else {
        return HttpResponse::BadRequest().json(json!({"error": "match parameter is required"}));
    };
    if let Err(e) = api.delete_match(match_id.value()).await {
        eprintln!("{}: {e}", function_name!());
        return HttpResponse::BadGateway().json(json!({"error": e.to_string()}));
    }
    states.write().await.remove(match_id.value());
    render_matches(api.get_ref(), function_name!()).await
}

#[named]
pub async fn stats_screen(api: Data<dyn DartsApi>) -> impl Responder {
    match api.list_players().await {
        Ok(players) => HttpResponse::Ok()
            .content_type("text/html")
            .body(render_stats_screen(&players).into_string()),
        Err(e) => {
            eprintln!("{}: {e}", function_name!());
            HttpResponse::BadGateway().json(json!({"error": e.to_string()}))
        }
    }
}

/// GET `/logs`. The transport log as a screen.
pub async fn logs_screen(ctx: Data<ApiContext>) -> impl Responder {
    let entries = ctx.logs().await;
    HttpResponse::Ok()
        .content_type("text/html")
        .body(render_logs_screen(&entries).into_string())
}

/// GET `/banner`. Polled by the shell; renders the newest service error
/// or an empty strip.
pub async fn banner(ctx: Data<ApiContext>) -> impl Responder {
    let error = ctx.last_error().await;
    HttpResponse::Ok()
        .content_type("text/html")
        .body(render_banner(error.as_deref()).into_string())
}

/// POST `/banner/clear`.
pub async fn banner_clear(ctx: Data<ApiContext>) -> impl Responder {
    ctx.clear_error().await;
    HttpResponse::Ok()
        .content_type("text/html")
        .body(render_banner(None).into_string())
}
