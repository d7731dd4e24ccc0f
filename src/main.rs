use rusty_darts::args;
use rusty_darts::controller::backend::{DartsApi, HttpDartsApi};
use rusty_darts::controller::play::engine::PlayStates;
use rusty_darts::controller::play::http_handlers::{play_history, play_screen, play_throw};
use rusty_darts::controller::roster::http_handlers::{
    banner, banner_clear, logs_screen, matches_create, matches_delete, matches_screen,
    players_create, players_delete, players_screen, start_options, start_screen, stats_screen,
};
use rusty_darts::controller::transport::ApiContext;
use rusty_darts::view::index::render_index_template;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();
    let args_for_web = args.clone();

    let ctx = ApiContext::new(&args.backend_url);
    let api: Arc<dyn DartsApi> = Arc::new(HttpDartsApi::new(ctx.clone()));
    let play_states: PlayStates = Arc::new(RwLock::new(HashMap::new()));

    if let Err(e) = api.list_players().await {
        eprintln!(
            "warning: darts service not reachable at {}: {e}",
            args.backend_url
        );
    }

    // mirror every new transport failure to stderr once
    let mut watcher_rx = ctx.subscribe();
    let watcher_ctx = ctx.clone();
    tokio::spawn(async move {
        let mut last_seen: Option<String> = None;
        while watcher_rx.changed().await.is_ok() {
            let current = watcher_ctx.last_error().await;
            if let Some(msg) = current.as_deref() {
                if last_seen.as_deref() != Some(msg) {
                    eprintln!("darts service error: {msg}");
                }
            }
            last_seen = current;
        }
    });

    let bind = (args.bind_addr.clone(), args.port);
    HttpServer::new(move || {
        App::new()
            .app_data(Data::from(api.clone()))
            .app_data(Data::new(ctx.clone()))
            .app_data(Data::new(play_states.clone()))
            .route("/", web::get().to(index))
            .route("/health", web::get().to(HttpResponse::Ok))
            .route("/start", web::get().to(start_screen))
            .route("/start/options", web::get().to(start_options))
            .route("/players", web::get().to(players_screen))
            .route("/players/create", web::post().to(players_create))
            .route("/players/delete", web::post().to(players_delete))
            .route("/matches", web::get().to(matches_screen))
            .route("/matches/create", web::post().to(matches_create))
            .route("/matches/delete", web::post().to(matches_delete))
            .route("/stats", web::get().to(stats_screen))
            .route("/logs", web::get().to(logs_screen))
            .route("/banner", web::get().to(banner))
            .route("/banner/clear", web::post().to(banner_clear))
            .route("/play", web::get().to(play_screen))
            .route("/play/throw", web::post().to(play_throw))
            .route("/play/history", web::get().to(play_history))
            .service(Files::new("/static", args_for_web.static_dir.clone()).show_files_listing())
    })
    .bind(bind)?
    .run()
    .await?;
    Ok(())
}

async fn index() -> impl Responder {
    let markup = render_index_template("Darts Counter");
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
