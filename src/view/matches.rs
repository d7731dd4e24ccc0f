use crate::model::{IoMode, Match};
use maud::{Markup, html};
use std::collections::HashMap;

fn name_for<'a>(names: &'a HashMap<String, String>, pid: &'a str) -> &'a str {
    names.get(pid).map_or(pid, String::as_str)
}

/// Matches screen: every known match with players, state, and actions to
/// resume or delete it.
#[must_use]
pub fn render_matches_screen(matches: &[Match], names: &HashMap<String, String>) -> Markup {
    html! {
        div class="matches-screen" {
            h1 { "Matches" }
            @if matches.is_empty() {
                p class="empty-note" { "No matches yet." }
            } @else {
                table class="styled-table" {
                    thead {
                        tr {
                            th { "PLAYERS" }
                            th { "POINTS" }
                            th { "MODE" }
                            th { "STATUS" }
                            th {}
                        }
                    }
                    tbody {
                        @for m in matches {
                            tr {
                                td {
                                    (m.players
                                        .iter()
                                        .map(|pid| name_for(names, pid))
                                        .collect::<Vec<_>>()
                                        .join(", "))
                                }
                                td { (m.start_at) }
                                td {
                                    (format!(
                                        "{} In / {} Out",
                                        IoMode::from_number(m.start_mode).label(),
                                        IoMode::from_number(m.end_mode).label()
                                    ))
                                }
                                td {
                                    @if m.won_by.is_empty() {
                                        "Running"
                                    } @else {
                                        (name_for(names, &m.won_by)) " won"
                                    }
                                }
                                td class="row-actions" {
                                    button class="resume-btn"
                                        hx-get=(format!("/play?match={}", m.id))
                                        hx-target="#content" hx-swap="innerHTML" { "Resume" }
                                    button class="delete-btn"
                                        hx-post=(format!("/matches/delete?match={}", m.id))
                                        hx-target="#content" hx-swap="innerHTML"
                                        hx-confirm="Delete match?" { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
