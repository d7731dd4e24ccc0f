use crate::HTMX_PATH;
use maud::{DOCTYPE, Markup, html};

/// Page shell. Every screen below it is an HTMX fragment swapped into
/// `#content`, and the banner strip polls for the newest service error.
#[must_use]
pub fn render_index_template(title: &str) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" type="text/css" href="static/styles.css";
                script src=(HTMX_PATH) {}
            }
            body {
                (render_banner(None))
                div class="app-shell" {
                    div id="content" hx-get="/start" hx-trigger="load" hx-swap="innerHTML" {
                        img alt="Loading..." class="htmx-indicator" width="150"
                            src="https://htmx.org//img/bars.svg" {}
                    }
                    (render_nav())
                }
            }
        }
    }
}

#[must_use]
pub fn render_banner(error: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = error {
            div id="banner" class="error-banner" hx-get="/banner" hx-trigger="every 4s"
                hx-swap="outerHTML" {
                span class="error-banner-text" { (message) }
                button class="error-banner-dismiss" hx-post="/banner/clear"
                    hx-target="#banner" hx-swap="outerHTML" { "Dismiss" }
            }
        } @else {
            div id="banner" hx-get="/banner" hx-trigger="every 4s" hx-swap="outerHTML" {}
        }
    }
}

fn render_nav() -> Markup {
    html! {
        nav class="bottom-nav" {
            button hx-get="/start" hx-target="#content" hx-swap="innerHTML" { "Start" }
            button hx-get="/players" hx-target="#content" hx-swap="innerHTML" { "Players" }
            button hx-get="/matches" hx-target="#content" hx-swap="innerHTML" { "Matches" }
            button hx-get="/stats" hx-target="#content" hx-swap="innerHTML" { "Stats" }
            button hx-get="/logs" hx-target="#content" hx-swap="innerHTML" { "Debug" }
        }
    }
}
