use crate::controller::transport::ApiLogEntry;
use maud::{Markup, html};

/// Debug screen: the transport log, newest call first, each entry
/// expandable to its full JSON.
#[must_use]
pub fn render_logs_screen(entries: &[ApiLogEntry]) -> Markup {
    html! {
        div class="logs-screen" {
            h1 { "Debug" }
            @if entries.is_empty() {
                p class="empty-note" { "No calls yet." }
            }
            @for entry in entries {
                details class="log-entry" {
                    summary {
                        span class="log-method" { (entry.method) }
                        " "
                        span class="log-op" { (entry.operation) }
                        " "
                        @match entry.status {
                            Some(status) => { span class="log-status" { (status) } }
                            None => { span class="log-status pending" { "..." } }
                        }
                        @if entry.error.is_some() {
                            " "
                            span class="log-error-mark" { "error" }
                        }
                    }
                    pre class="log-body" {
                        (serde_json::to_string_pretty(entry).unwrap_or_default())
                    }
                }
            }
        }
    }
}
