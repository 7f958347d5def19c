use maud::{html, Markup};

use crate::history::HistoryStore;
use crate::names;

pub fn page(store: &HistoryStore) -> Markup {
    html! {
        h1 { "Quiz Score History" }

        @if store.is_empty() {
            p { "No quiz history yet." }
        } @else {
            @for (subject, attempts) in store.iter() {
                article {
                    h3 { (subject) }
                    table {
                        thead {
                            tr {
                                th { "Date" }
                                th { "Score" }
                            }
                        }
                        tbody {
                            @for attempt in attempts {
                                tr {
                                    td { (attempt.timestamp.format("%Y-%m-%d %H:%M")) }
                                    td { (attempt.score) " / " (attempt.total) }
                                }
                            }
                        }
                    }
                }
            }

            a role="button" href=(names::HISTORY_EXPORT_URL) download=(names::HISTORY_EXPORT_FILENAME) {
                "Download Quiz History"
            }
        }
    }
}
