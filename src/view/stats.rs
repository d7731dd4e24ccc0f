use crate::model::Player;
use maud::{Markup, html};

/// Average per throw, guarded for players who have not thrown yet.
fn average(player: &Player) -> f64 {
    if player.throws > 0 {
        player.total_score as f64 / player.throws as f64
    } else {
        0.0
    }
}

/// Stats screen: bar charts for average and total, then the raw numbers.
#[must_use]
pub fn render_stats_screen(players: &[Player]) -> Markup {
    let max_average = players
        .iter()
        .map(average)
        .fold(0.0_f64, f64::max)
        .max(f64::MIN_POSITIVE);
    let max_total = players
        .iter()
        .map(|p| p.total_score)
        .max()
        .unwrap_or(0)
        .max(1);
    html! {
        div class="stats-screen" {
            h1 { "Stats" }
            div class="stats-section" {
                h3 { "Average per throw" }
                div class="bar-chart" {
                    @for player in players {
                        @let avg = average(player);
                        @let width = avg / max_average * 100.0;
                        div class="bar-row" {
                            span class="bar-label" { (player.name) }
                            div class="bar-track" {
                                div class="bar-fill" style=(format!("width: {width:.1}%;")) {}
                            }
                            span class="bar-value" { (format!("{avg:.2}")) }
                        }
                    }
                }
            }
            div class="stats-section" {
                h3 { "Total points" }
                div class="bar-chart" {
                    @for player in players {
                        @let width = player.total_score as f64 / max_total as f64 * 100.0;
                        div class="bar-row" {
                            span class="bar-label" { (player.name) }
                            div class="bar-track" {
                                div class="bar-fill" style=(format!("width: {width:.1}%;")) {}
                            }
                            span class="bar-value" { (player.total_score) }
                        }
                    }
                }
            }
            table class="styled-table" {
                thead {
                    tr {
                        th { "PLAYER" }
                        th { "MATCHES" }
                        th { "THROWS" }
                        th { "POINTS" }
                        th { "AVG" }
                    }
                }
                tbody {
                    @for player in players {
                        tr {
                            td { (player.name) }
                            td { (player.matches) }
                            td { (player.throws) }
                            td { (player.total_score) }
                            td { (format!("{:.2}", average(player))) }
                        }
                    }
                }
            }
        }
    }
}
