#[cfg(test)]
#[path = "quiz_test.rs"]
mod tests;

use std::collections::BTreeMap;

use chrono::DateTime;
use chrono::NaiveDateTime;
use serde_derive::Deserialize;
use serde_derive::Serialize;

pub type AttemptId = i64;

/// Selected option per question index. Keys travel as JSON strings (`"0"`)
/// but are kept as indices in memory.
pub type Answers = BTreeMap<usize, String>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizRequest {
    Topic(String),
    Url(String),
}

impl QuizRequest {
    pub fn from_input(input: &str) -> QuizRequest {
        if input.contains("wikipedia.org") {
            return QuizRequest::Url(input.to_string());
        }

        return QuizRequest::Topic(input.to_string());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(rename = "answer")]
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub difficulty: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizContent {
    #[serde(default)]
    pub quiz: Vec<Question>,
    #[serde(default)]
    pub related_topics: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAttempt {
    #[serde(default)]
    pub id: Option<AttemptId>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub data: QuizContent,
    #[serde(default, rename = "user_answers")]
    pub saved_answers: Option<Answers>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl QuizAttempt {
    pub fn questions(&self) -> &[Question] {
        return &self.data.quiz;
    }

    pub fn related_topics(&self) -> &[String] {
        if let Some(topics) = &self.data.related_topics {
            return topics;
        }

        return &[];
    }

    /// Title shown in lists, falling back to the source URL.
    pub fn display_title(&self) -> String {
        if let Some(title) = &self.title {
            if !title.trim().is_empty() {
                return title.to_string();
            }
        }

        if let Some(url) = &self.url {
            if !url.trim().is_empty() {
                return url.to_string();
            }
        }

        return "Untitled quiz".to_string();
    }

    /// The creation date as `YYYY-MM-DD`. The service sends either RFC 3339 or
    /// a naive ISO timestamp depending on the database driver.
    pub fn created_date(&self) -> Option<String> {
        let created_at = self.created_at.as_ref()?;

        if let Ok(date) = DateTime::parse_from_rfc3339(created_at) {
            return Some(date.format("%Y-%m-%d").to_string());
        }

        if let Ok(date) = NaiveDateTime::parse_from_str(created_at, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(date.format("%Y-%m-%d").to_string());
        }

        return None;
    }

    /// Saved answers restricted to valid question indices.
    pub fn seeded_answers(&self) -> Answers {
        let total = self.questions().len();
        return self
            .saved_answers
            .clone()
            .unwrap_or_default()
            .into_iter()
            .filter(|(idx, _)| return *idx < total)
            .collect();
    }
}

/// Number of questions whose selected option equals the correct answer.
/// Unanswered questions never match and indices past the end are ignored.
pub fn score(questions: &[Question], answers: &Answers) -> usize {
    return questions
        .iter()
        .enumerate()
        .filter(|(idx, question)| {
            return answers
                .get(idx)
                .map(|answer| return *answer == question.correct_answer)
                .unwrap_or(false);
        })
        .count();
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResultsRequest {
    pub user_answers: Answers,
}
