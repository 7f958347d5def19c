use maud::{html, Markup};

use crate::models::Subject;
use crate::names;
use crate::quiz::{GradeLine, QuizSession};

pub fn subject_index(subjects: &[Subject]) -> Markup {
    html! {
        h1 { "Quiz Mode" }
        p { "Pick a subject. Questions are shuffled on every attempt." }

        @for subject in subjects {
            article {
                h3 { (subject.name) }
                p { (subject.quiz.len()) " questions" }
                a role="button" href=(names::quiz_page_url(&subject.name)) { "Start quiz" }
            }
        }
    }
}

pub fn questions(session: &QuizSession) -> Markup {
    let count = session.questions().len();

    html! {
        h1 { "Quiz: " (session.subject()) }

        form action=(names::submit_quiz_url(session.subject())) method="post" {
            @for (idx, question) in session.questions().iter().enumerate() {
                article {
                    p."question-number" {
                        "Q" strong { (idx + 1) } " of " (count)
                    }
                    h3 { (question.prompt) }
                    fieldset {
                        @for option in &question.options {
                            label {
                                @if session.selection(idx) == Some(option.as_str()) {
                                    input type="radio" name=(format!("q{idx}")) value=(option) checked;
                                } @else {
                                    input type="radio" name=(format!("q{idx}")) value=(option);
                                }
                                (option)
                            }
                        }
                    }
                }
            }
            button type="submit" { "Submit Quiz" }
        }
    }
}

pub struct ResultsData<'a> {
    pub subject: &'a str,
    pub score: u32,
    pub total: u32,
    pub detail: Vec<GradeLine<'a>>,
}

pub fn results(data: ResultsData<'_>) -> Markup {
    html! {
        h1 { "Quiz: " (data.subject) }
        p."score-banner" {
            "You scored " strong { (data.score) } " out of " (data.total)
        }

        @for (idx, line) in data.detail.iter().enumerate() {
            article {
                p."question-number" { "Q" strong { (idx + 1) } }
                h3 { (line.question.prompt) }
                @if let Some(selected) = line.selected {
                    @if line.is_correct {
                        p."correct" { "Correct! (" (selected) ")" }
                    } @else {
                        p."wrong" {
                            "Wrong! You picked " (selected)
                            ". Correct answer: " (line.correct)
                        }
                    }
                } @else {
                    p."wrong" { "Unanswered. Correct answer: " (line.correct) }
                }
            }
        }

        div."actions" {
            form action=(names::retry_quiz_url(data.subject)) method="post" {
                button type="submit" { "Try Again" }
            }
            a role="button" href=(names::HISTORY_URL) { "Quiz History" }
        }
    }
}
