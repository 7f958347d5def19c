use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::quiz::QuizError;

/// One multiple-choice item. Immutable once the bank is loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// A named topic area: its quiz items plus the Ask-page blurbs.
#[derive(Debug, Clone, Deserialize)]
pub struct Subject {
    pub name: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub quiz: Vec<Question>,
}

/// The static subject catalogue.
#[derive(Debug, Clone)]
pub struct Bank {
    subjects: Vec<Subject>,
}

const BUILTIN_SUBJECTS: &str = include_str!("../subjects.json");

impl Bank {
    pub fn builtin() -> color_eyre::Result<Self> {
        Self::from_json(BUILTIN_SUBJECTS)
    }

    pub fn from_json(raw: &str) -> color_eyre::Result<Self> {
        let subjects: Vec<Subject> = serde_json::from_str(raw)?;
        let bank = Self { subjects };
        bank.validate()?;
        Ok(bank)
    }

    fn validate(&self) -> color_eyre::Result<()> {
        let mut seen = std::collections::HashSet::new();
        for subject in &self.subjects {
            if !seen.insert(subject.name.as_str()) {
                return Err(eyre!("duplicate subject '{}'", subject.name));
            }
            for (idx, question) in subject.quiz.iter().enumerate() {
                if question.options.len() < 2 {
                    return Err(eyre!(
                        "subject '{}', question {}: needs at least two options",
                        subject.name,
                        idx + 1
                    ));
                }
                if !question.options.contains(&question.answer) {
                    return Err(eyre!(
                        "subject '{}', question {}: answer '{}' is not one of the options",
                        subject.name,
                        idx + 1,
                        question.answer
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Catalogue lookup; an unknown name surfaces as the engine's
    /// `UnknownSubject` error.
    pub fn subject(&self, name: &str) -> Result<&Subject, QuizError> {
        self.subjects
            .iter()
            .find(|subject| subject.name == name)
            .ok_or_else(|| QuizError::UnknownSubject(name.to_string()))
    }
}
