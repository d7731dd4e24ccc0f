use crate::model::{IoMode, Player, next_start_at};
use maud::{Markup, html};
use std::collections::HashMap;

/// Options picked on the start screen. Sets and legs are rendered for the
/// scoreboard only; the darts service keys a match on points and the
/// in/out modes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartOptions {
    pub start_at: i32,
    pub start_mode: IoMode,
    pub end_mode: IoMode,
    pub sets: u32,
    pub legs: u32,
    pub random_order: bool,
}

impl Default for StartOptions {
    fn default() -> Self {
        StartOptions {
            start_at: 301,
            start_mode: IoMode::Master,
            end_mode: IoMode::Master,
            sets: 1,
            legs: 1,
            random_order: false,
        }
    }
}

impl StartOptions {
    #[must_use]
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        let defaults = StartOptions::default();
        StartOptions {
            start_at: query
                .get("start_at")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.start_at),
            start_mode: query
                .get("start_mode")
                .and_then(|v| v.parse::<u8>().ok())
                .map_or(defaults.start_mode, IoMode::from_number),
            end_mode: query
                .get("end_mode")
                .and_then(|v| v.parse::<u8>().ok())
                .map_or(defaults.end_mode, IoMode::from_number),
            sets: query
                .get("sets")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.sets),
            legs: query
                .get("legs")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.legs),
            random_order: query.get("random").is_some_and(|v| v == "1"),
        }
    }

    #[must_use]
    pub fn query(&self) -> String {
        format!(
            "start_at={}&start_mode={}&end_mode={}&sets={}&legs={}",
            self.start_at,
            self.start_mode.number(),
            self.end_mode.number(),
            self.sets,
            self.legs
        )
    }

    #[must_use]
    pub fn cycle_start_at(&self) -> Self {
        StartOptions {
            start_at: next_start_at(self.start_at),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn cycle_start_mode(&self) -> Self {
        StartOptions {
            start_mode: self.start_mode.next(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn cycle_end_mode(&self) -> Self {
        StartOptions {
            end_mode: self.end_mode.next(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn cycle_sets(&self) -> Self {
        StartOptions {
            sets: self.sets % 5 + 1,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn cycle_legs(&self) -> Self {
        StartOptions {
            legs: self.legs % 5 + 1,
            ..self.clone()
        }
    }
}

/// Start screen: match options, the player roster with pick boxes, and the
/// button that creates the match. Cycler buttons swap only the options
/// fragment so picked players survive.
#[must_use]
pub fn render_start_screen(players: &[Player], options: &StartOptions) -> Markup {
    html! {
        div class="start-screen" {
            h1 { "Darts Counter" }
            form hx-post="/matches/create" hx-target="#content" hx-swap="innerHTML" {
                (render_start_options(options))
                button type="submit" class="start-btn" { "START" }
                label class="random-row" {
                    input type="checkbox" name="random" value="1" checked[options.random_order];
                    span { "Random order" }
                }
                div class="roster-title" { "Players" }
                div class="roster-list" {
                    @for player in players {
                        label class="roster-row" {
                            input type="checkbox" name="pid" value=(player.id);
                            span class="roster-name" { (player.name) }
                        }
                    }
                }
            }
            button class="link-btn" hx-get="/players" hx-target="#content"
                hx-swap="innerHTML" { "Add player" }
        }
    }
}

/// Options fragment. Hidden inputs carry the picked values so the
/// surrounding form submits them.
#[must_use]
pub fn render_start_options(options: &StartOptions) -> Markup {
    html! {
        div id="start-options" class="option-grid" {
            input type="hidden" name="start_at" value=(options.start_at);
            input type="hidden" name="start_mode" value=(options.start_mode.number());
            input type="hidden" name="end_mode" value=(options.end_mode.number());
            input type="hidden" name="sets" value=(options.sets);
            input type="hidden" name="legs" value=(options.legs);
            (option_box("Points", &options.start_at.to_string(), "green", &options.cycle_start_at()))
            (option_box(
                "Check-Out",
                &format!("{} Out", options.end_mode.label()),
                "red",
                &options.cycle_end_mode(),
            ))
            (option_box("Sets", &options.sets.to_string(), "green", &options.cycle_sets()))
            (static_option_box("Set/Leg", "First to"))
            (option_box(
                "Check-In",
                &format!("{} In", options.start_mode.label()),
                "red",
                &options.cycle_start_mode(),
            ))
            (option_box("Legs", &options.legs.to_string(), "green", &options.cycle_legs()))
        }
    }
}

fn option_box(label: &str, value: &str, color: &str, next: &StartOptions) -> Markup {
    html! {
        button type="button" class=(format!("option-box option-{color}"))
            hx-get=(format!("/start/options?{}", next.query()))
            hx-target="#start-options" hx-swap="outerHTML" {
            div class="option-label" { (label) }
            div class="option-value" { (value) }
        }
    }
}

fn static_option_box(label: &str, value: &str) -> Markup {
    html! {
        div class="option-box option-green option-static" {
            div class="option-label" { (label) }
            div class="option-value" { (value) }
        }
    }
}
