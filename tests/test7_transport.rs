use actix_web::{App, HttpResponse, HttpServer, web};
use reqwest::Method;
use rusty_darts::controller::backend::{DartsApi, HttpDartsApi};
use rusty_darts::controller::transport::{ApiContext, LOG_CAPACITY, TransportError};
use rusty_darts::model::{Player, ThrowCode, ThrowRequest};
use serde_json::{Value, json};
use std::net::TcpListener;
use std::time::Duration;

const MID: &str = "11111111-1111-4111-8111-111111111111";
const PID: &str = "22222222-2222-4222-8222-222222222222";

/// Darts service stand-in on a loopback port. The socket listens as soon
/// as this returns, so callers need no startup delay.
fn spawn_backend() -> std::io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let server = HttpServer::new(|| {
        App::new()
            .route(
                "/listPlayers",
                web::get().to(|| async {
                    HttpResponse::Ok().json(json!([{
                        "id": "55555555-5555-4555-8555-555555555555",
                        "name": "Alice",
                        "matches": 2,
                        "throws": 9,
                        "totalScore": 324
                    }]))
                }),
            )
            .route(
                "/createPlayer",
                web::post().to(|body: web::Json<Value>| async move {
                    HttpResponse::Ok().json(json!({
                        "id": "66666666-6666-4666-8666-666666666666",
                        "name": body["name"].clone(),
                        "matches": 0,
                        "throws": 0,
                        "totalScore": 0
                    }))
                }),
            )
            .route(
                "/deletePlayer",
                web::delete().to(|| async {
                    HttpResponse::Ok().json(json!({"status": "player deleted"}))
                }),
            )
            .route(
                "/playerThrow",
                web::post().to(|body: web::Json<Value>| async move {
                    HttpResponse::Ok().json(json!({
                        "Won": false,
                        "NotValid": false,
                        "NextThrowBy": body["Pid"].clone(),
                        "Scores": null,
                        "PossibleFinish": null
                    }))
                }),
            )
            .route(
                "/getMatch",
                web::get().to(|| async { HttpResponse::NotFound().body("no such match") }),
            )
            .route(
                "/plain",
                web::get().to(|| async { HttpResponse::Ok().body("not json") }),
            )
    })
    .workers(1)
    .listen(listener)?
    .run();
    actix_web::rt::spawn(server);
    Ok(format!("http://{addr}"))
}

#[actix_web::test]
async fn a_round_trip_lands_in_the_log() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_backend()?;
    let ctx = ApiContext::new(&base);
    let api = HttpDartsApi::new(ctx.clone());

    let players = api.list_players().await?;
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "Alice");
    assert_eq!(players[0].matches, 2);
    assert_eq!(players[0].total_score, 324);

    let logs = ctx.logs().await;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].operation, "listPlayers");
    assert_eq!(logs[0].method, "GET");
    assert_eq!(logs[0].status, Some(200));
    assert!(logs[0].error.is_none());
    assert!(logs[0].response_body.is_some());
    assert!(ctx.last_error().await.is_none());
    Ok(())
}

#[actix_web::test]
async fn a_throw_posts_pascal_case_json() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_backend()?;
    let ctx = ApiContext::new(&base);
    let api = HttpDartsApi::new(ctx.clone());

    let req = ThrowRequest {
        mid: MID.to_string(),
        pid: PID.to_string(),
        throw_code: ThrowCode::try_from(60)?,
    };
    let outcome = api.player_throw(&req).await?;
    // the stand-in echoes Pid, and null collections come back empty
    assert_eq!(outcome.next_throw_by, PID);
    assert!(outcome.scores.is_empty());
    assert!(outcome.possible_finish.is_empty());

    let logs = ctx.logs().await;
    let body = logs[0].request_body.as_ref().unwrap();
    assert_eq!(body["Mid"], MID);
    assert_eq!(body["Pid"], PID);
    assert_eq!(body["Throw"], 60);
    Ok(())
}

#[actix_web::test]
async fn created_players_come_back_filled_in() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_backend()?;
    let ctx = ApiContext::new(&base);
    let api = HttpDartsApi::new(ctx.clone());

    let player = api.create_player("Dana").await?;
    assert_eq!(player.name, "Dana");
    assert!(!player.id.is_empty());

    api.delete_player(&player.id).await?;
    let logs = ctx.logs().await;
    assert_eq!(logs[0].operation, "deletePlayer");
    assert_eq!(logs[0].method, "DELETE");
    assert_eq!(logs[0].status, Some(200));
    Ok(())
}

#[actix_web::test]
async fn failures_stick_until_the_next_call() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_backend()?;
    let ctx = ApiContext::new(&base);
    let api = HttpDartsApi::new(ctx.clone());

    let err = api.get_match(MID).await.unwrap_err();
    assert_eq!(
        err,
        TransportError::Status {
            status: 404,
            body: "no such match".to_string(),
        }
    );
    assert_eq!(ctx.last_error().await.as_deref(), Some("404: no such match"));
    let logs = ctx.logs().await;
    assert_eq!(logs[0].status, Some(404));
    assert!(logs[0].error.is_some());

    // the next call clears the sticky error on its way out
    api.list_players().await?;
    assert!(ctx.last_error().await.is_none());
    Ok(())
}

#[actix_web::test]
async fn clear_error_wipes_the_sticky_failure() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_backend()?;
    let ctx = ApiContext::new(&base);
    let api = HttpDartsApi::new(ctx.clone());

    let _ = api.get_match(MID).await;
    assert!(ctx.last_error().await.is_some());
    ctx.clear_error().await;
    assert!(ctx.last_error().await.is_none());
    Ok(())
}

#[actix_web::test]
async fn subscribers_tick_on_every_call() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_backend()?;
    let ctx = ApiContext::new(&base);
    let api = HttpDartsApi::new(ctx.clone());

    let mut rx = ctx.subscribe();
    rx.borrow_and_update();
    api.list_players().await?;
    tokio::time::timeout(Duration::from_secs(1), rx.changed()).await??;
    Ok(())
}

#[actix_web::test]
async fn junk_bodies_surface_as_decode_errors() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_backend()?;
    let ctx = ApiContext::new(&base);

    let result: Result<Vec<Player>, TransportError> =
        ctx.call("plain", Method::GET, "/plain", None).await;
    assert!(matches!(result.unwrap_err(), TransportError::Decode(_)));

    // the raw text is still recorded for the debug screen
    let logs = ctx.logs().await;
    assert_eq!(
        logs[0].response_body,
        Some(Value::String("not json".to_string()))
    );
    Ok(())
}

#[actix_web::test]
async fn an_unreachable_service_reports_the_request_error() -> Result<(), Box<dyn std::error::Error>>
{
    // bind and drop a listener so the port is known to be closed
    let port = {
        let probe = TcpListener::bind("127.0.0.1:0")?;
        probe.local_addr()?.port()
    };
    let ctx = ApiContext::new(&format!("http://127.0.0.1:{port}"));
    let api = HttpDartsApi::new(ctx.clone());

    let err = api.list_players().await.unwrap_err();
    assert!(matches!(err, TransportError::Request(_)));
    assert!(ctx.last_error().await.is_some());
    Ok(())
}

#[actix_web::test]
async fn the_log_keeps_only_the_newest_calls() -> Result<(), Box<dyn std::error::Error>> {
    let base = spawn_backend()?;
    let ctx = ApiContext::new(&base);
    let api = HttpDartsApi::new(ctx.clone());

    for _ in 0..LOG_CAPACITY + 4 {
        api.list_players().await?;
    }
    let req = ThrowRequest {
        mid: MID.to_string(),
        pid: PID.to_string(),
        throw_code: ThrowCode::try_from(1)?,
    };
    api.player_throw(&req).await?;

    let logs = ctx.logs().await;
    assert_eq!(logs.len(), LOG_CAPACITY);
    assert_eq!(logs[0].operation, "playerThrow");
    Ok(())
}
