use crate::controller::play::engine::{PlayState, TURN_THROWS, finish_labels};
use crate::view::board::{render_board, render_throw_grid};
use maud::{Markup, html};

/// Which throw input the play screen shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputView {
    Grid,
    Board,
}

impl InputView {
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("board") => InputView::Board,
            _ => InputView::Grid,
        }
    }

    #[must_use]
    pub fn query(self) -> &'static str {
        match self {
            InputView::Grid => "grid",
            InputView::Board => "board",
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            InputView::Grid => InputView::Board,
            InputView::Board => InputView::Grid,
        }
    }

    /// Label for the button that switches to the other input.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            InputView::Grid => "Board input",
            InputView::Board => "Number input",
        }
    }
}

/// Whole play screen for one match: player cards, throw input, the open
/// turn, finish suggestions and the throw log.
#[must_use]
pub fn render_play_screen(state: &PlayState, input: InputView) -> Markup {
    let match_id = state.match_id.as_str();
    html! {
        div id="play-root" class="play-screen" {
            div class="play-header" {
                button class="back-btn" hx-get="/matches" hx-target="#content"
                    hx-swap="innerHTML" { "Back" }
                h1 { "Play" }
                button class="toggle-btn"
                    hx-get=(format!("/play?match={match_id}&view={}", input.other().query()))
                    hx-target="#content" hx-swap="innerHTML" { (input.toggle_label()) }
            }
            @if let Some(winner) = state.won_by.as_deref() {
                div class="winner-banner" { (state.name_of(winner)) " wins" }
            }
            @if state.last_bust {
                div class="bust-banner" { "Bust, turn over" }
            }
            div class="play-layout" {
                div class="player-cards" {
                    @for pid in &state.players {
                        @let active = state.current_player.as_deref() == Some(pid.as_str());
                        div class=(if active { "player-card active" } else { "player-card" }) {
                            div class="player-card-name" { (state.name_of(pid)) }
                            div class="player-card-score" {
                                (state.scores.get(pid).copied().unwrap_or(0))
                            }
                        }
                    }
                }
                div class="play-main" {
                    @if state.won_by.is_some() {
                        div class="match-over" { "Match over" }
                    } @else {
                        @match input {
                            InputView::Board => { (render_board(match_id)) }
                            InputView::Grid => { (render_throw_grid(match_id)) }
                        }
                    }
                    div class="turn-slots" {
                        @for i in 0..TURN_THROWS {
                            div class="turn-slot" {
                                div class="turn-slot-label" { "Throw " (i + 1) }
                                div class="turn-slot-value" {
                                    @match state.turn_buffer.get(i) {
                                        Some(code) => { (code.label()) }
                                        None => { "-" }
                                    }
                                }
                            }
                        }
                    }
                    @let chips = finish_labels(&state.finishes);
                    @if !chips.is_empty() {
                        div class="finish-block" {
                            div class="finish-title" { "Possible finishes" }
                            div class="finish-chips" {
                                @for label in &chips {
                                    span class="finish-chip" { (label) }
                                }
                            }
                        }
                    }
                    div id="history" hx-get=(format!("/play/history?match={match_id}"))
                        hx-trigger="load" hx-swap="innerHTML" {
                        img alt="Loading..." class="htmx-indicator" width="60"
                            src="https://htmx.org//img/bars.svg" {}
                    }
                }
            }
        }
    }
}
