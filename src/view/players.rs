use crate::model::Player;
use maud::{Markup, html};

/// Player management screen: add by name, roster table, delete per row.
#[must_use]
pub fn render_players_screen(players: &[Player]) -> Markup {
    html! {
        div class="players-screen" {
            h1 { "Players" }
            form class="add-player-form" hx-post="/players/create" hx-target="#content"
                hx-swap="innerHTML" {
                input type="text" name="name" placeholder="Name" required;
                button type="submit" { "Add" }
            }
            @if players.is_empty() {
                p class="empty-note" { "No players yet." }
            } @else {
                table class="styled-table" {
                    thead {
                        tr {
                            th { "NAME" }
                            th { "MATCHES" }
                            th { "THROWS" }
                            th {}
                        }
                    }
                    tbody {
                        @for player in players {
                            tr {
                                td { (player.name) }
                                td { (player.matches) }
                                td { (player.throws) }
                                td class="row-actions" {
                                    button class="delete-btn"
                                        hx-post=(format!("/players/delete?player={}", player.id))
                                        hx-target="#content" hx-swap="innerHTML"
                                        hx-confirm="Delete player?" { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
