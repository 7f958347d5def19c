use std::collections::BTreeMap;

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::history::QuizAttempt;
use crate::models::{Question, Subject};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("no quiz available for subject '{0}'")]
    UnknownSubject(String),
    #[error("question index {index} is out of range for a quiz of {count} questions")]
    InvalidIndex { index: usize, count: usize },
    #[error("'{option}' is not one of the options for question {index}")]
    InvalidOption { index: usize, option: String },
    #[error("this quiz was already submitted")]
    AlreadySubmitted,
    #[error("this quiz has not been submitted yet")]
    NotSubmitted,
}

/// One in-progress quiz pass. Purely in-memory; the hosting layer keeps it
/// for the duration of the browser session and replaces it wholesale on
/// retry or when the quiz page is reopened.
#[derive(Debug, Clone)]
pub struct QuizSession {
    subject: String,
    questions: Vec<Question>,
    selections: BTreeMap<usize, String>,
    submitted: bool,
}

/// Per-question feedback line for the results view.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeLine<'a> {
    pub question: &'a Question,
    pub selected: Option<&'a str>,
    pub correct: &'a str,
    pub is_correct: bool,
}

impl QuizSession {
    /// Deals a fresh, uniformly shuffled pass over the subject's questions.
    pub fn start(subject: &Subject, rng: &mut impl Rng) -> Result<Self, QuizError> {
        if subject.quiz.is_empty() {
            return Err(QuizError::UnknownSubject(subject.name.clone()));
        }

        let mut questions = subject.quiz.clone();
        questions.shuffle(rng);

        Ok(Self {
            subject: subject.name.clone(),
            questions,
            selections: BTreeMap::new(),
            submitted: false,
        })
    }

    /// "Try Again": identical to [`QuizSession::start`], reshuffling and
    /// clearing all selections and submission state.
    pub fn reset(subject: &Subject, rng: &mut impl Rng) -> Result<Self, QuizError> {
        Self::start(subject, rng)
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn selection(&self, index: usize) -> Option<&str> {
        self.selections.get(&index).map(String::as_str)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Stores the user's pick for one question. Selections arriving after
    /// submission are kept (the controls stay live in the UI) but the
    /// recorded score is already fixed.
    pub fn record_selection(&mut self, index: usize, option: &str) -> Result<(), QuizError> {
        let question = self.questions.get(index).ok_or(QuizError::InvalidIndex {
            index,
            count: self.questions.len(),
        })?;

        if !question.options.iter().any(|candidate| candidate == option) {
            return Err(QuizError::InvalidOption {
                index,
                option: option.to_string(),
            });
        }

        self.selections.insert(index, option.to_string());
        Ok(())
    }

    /// Scores the pass. An unanswered question counts as wrong, never as an
    /// error. Returns the attempt for the caller to append to the history
    /// store.
    pub fn submit(&mut self) -> Result<QuizAttempt, QuizError> {
        if self.submitted {
            return Err(QuizError::AlreadySubmitted);
        }
        self.submitted = true;

        let score = self
            .questions
            .iter()
            .enumerate()
            .filter(|(index, question)| {
                self.selections
                    .get(index)
                    .is_some_and(|picked| *picked == question.answer)
            })
            .count();

        Ok(QuizAttempt {
            subject: self.subject.clone(),
            score: score as u32,
            total: self.questions.len() as u32,
            timestamp: Utc::now(),
        })
    }

    /// Read-only per-question feedback; only available once submitted.
    pub fn grade_detail(&self) -> Result<Vec<GradeLine<'_>>, QuizError> {
        if !self.submitted {
            return Err(QuizError::NotSubmitted);
        }

        Ok(self
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let selected = self.selection(index);
                GradeLine {
                    question,
                    selected,
                    correct: question.answer.as_str(),
                    is_correct: selected == Some(question.answer.as_str()),
                }
            })
            .collect())
    }
}
