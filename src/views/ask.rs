use maud::{html, Markup};

use crate::{models::Subject, names, sessions::ChatExchange};

pub fn page(subjects: &[Subject], selected: Option<&str>, chat: &[ChatExchange]) -> Markup {
    html! {
        h1 { "Ask EduBot" }

        form action=(names::ASK_URL) method="post" {
            label {
                "Choose Subject"
                select name="subject" {
                    @for subject in subjects {
                        @if Some(subject.name.as_str()) == selected {
                            option value=(subject.name) selected { (subject.name) }
                        } @else {
                            option value=(subject.name) { (subject.name) }
                        }
                    }
                }
            }
            label {
                "Your question:"
                textarea name="question" rows="4" placeholder="e.g. Solve 2x + 3 = 7" {}
            }
            button type="submit" { "Submit" }
        }

        @if let Some(subject) = selected.and_then(|name| subjects.iter().find(|s| s.name == name)) {
            (study_tips(subject))
        }

        @if !chat.is_empty() {
            h2 { "Previous questions" }
            @for exchange in chat.iter().rev() {
                article {
                    p { small { (exchange.subject) } }
                    p { strong { "You: " } (exchange.question) }
                    p { strong { "EduBot: " } (exchange.answer) }
                }
            }
        }
    }
}

fn study_tips(subject: &Subject) -> Markup {
    html! {
        article {
            h4 { (subject.name) " tips" }
            @if !subject.examples.is_empty() {
                p { "Example questions:" }
                ul {
                    @for example in &subject.examples {
                        li { (example) }
                    }
                }
            }
            @if !subject.recommendations.is_empty() {
                p { "Recommendations:" }
                ul {
                    @for recommendation in &subject.recommendations {
                        li { (recommendation) }
                    }
                }
            }
        }
    }
}
