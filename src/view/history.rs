use crate::controller::play::engine::{PlayState, TURN_THROWS};
use crate::controller::play::history::turn_groups;
use maud::{Markup, html};

/// Throw log fragment, one table per player, newest turn first. Every turn
/// row carries exactly three cells; slots a turn never used stay blank.
#[must_use]
pub fn render_history(state: &PlayState) -> Markup {
    html! {
        div class="history-columns" {
            @for pid in &state.players {
                @let log = state.history.get(pid).map_or(&[][..], Vec::as_slice);
                div class="history-column" {
                    h3 { (state.name_of(pid)) }
                    table class="styled-table history-table" {
                        thead {
                            tr {
                                th { "TURN" }
                                th { "1" }
                                th { "2" }
                                th { "3" }
                            }
                        }
                        tbody {
                            @for group in turn_groups(log) {
                                @let short = group.ended && group.throws.len() < TURN_THROWS;
                                tr class=(if short { "turn-row ended-early" } else { "turn-row" }) {
                                    td class="turn-number" { (group.turn_number) }
                                    @for i in 0..TURN_THROWS {
                                        td class="turn-throw" {
                                            @if let Some(element) = group.throws.get(i) {
                                                (element.throw_code.label())
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
