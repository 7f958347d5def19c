use maud::{html, Markup, DOCTYPE};

use crate::{names, utils};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="/static/index.css";
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                ul {
                    li {
                        a href="/" {
                            strong { "EduSolve" }
                        }
                    }
                }
                ul {
                    li { a href="/" { "Ask" } }
                    li { a href=(names::QUIZ_INDEX_URL) { "Quiz" } }
                    li { a href=(names::HISTORY_URL) { "History" } }
                    li { a href=(names::SOLVER_URL) { "Calculator" } }
                    li."version" { (utils::VERSION) }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())
            (icon())

            title { (format!("{title} - EduSolve")) }
        }

        body."container" {
            (header())
            (main(body))
        }
    }
}
