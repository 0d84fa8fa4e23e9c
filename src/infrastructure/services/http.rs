#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::domain::models::Answers;
use crate::domain::models::AttemptId;
use crate::domain::models::QuizAttempt;
use crate::domain::models::QuizError;
use crate::domain::models::QuizRequest;
use crate::domain::models::QuizService;
use crate::domain::models::SaveResultsRequest;

const GENERATE_FAILED: &str = "Failed to generate quiz. Please check the URL and try again.";
const LIST_FAILED: &str = "Failed to load quiz history";
const FETCH_FAILED: &str = "Failed to load quiz";
const SAVE_FAILED: &str = "Failed to save quiz results";
const DELETE_FAILED: &str = "Failed to delete quiz";

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ErrorResponse {
    detail: Option<serde_json::Value>,
}

fn network_err(err: reqwest::Error) -> QuizError {
    return QuizError::Network(err.to_string());
}

/// Pulls a human readable message out of an error body. Only string `detail`
/// fields are surfaced, anything else falls back to the operation's message.
fn error_message(body: &str, fallback: &str) -> String {
    return serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|res| return res.detail)
        .and_then(|detail| return detail.as_str().map(|text| return text.to_string()))
        .filter(|text| return !text.trim().is_empty())
        .unwrap_or_else(|| return fallback.to_string());
}

pub struct HttpQuizService {
    url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpQuizService {
    pub fn new(url: String, timeout: Duration) -> HttpQuizService {
        return HttpQuizService {
            url: url.trim_end_matches('/').to_string(),
            timeout,
            client: reqwest::Client::new(),
        };
    }

    fn endpoint(&self, path: &str) -> String {
        return format!("{url}{path}", url = self.url);
    }

    async fn probe(&self, path: &str) -> Result<(), QuizError> {
        let res = self
            .client
            .get(self.endpoint(path))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(network_err)?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), path, "Health probe failed");
            return Err(QuizError::Network(format!(
                "{path} responded with {}",
                res.status().as_u16()
            )));
        }

        return Ok(());
    }

    async fn check(
        &self,
        res: reqwest::Response,
        fallback: &str,
    ) -> Result<reqwest::Response, QuizError> {
        if res.status().is_success() {
            return Ok(res);
        }

        let status = res.status().as_u16();
        let body = res.text().await.unwrap_or_default();
        let message = error_message(&body, fallback);
        tracing::error!(status, detail = %message, "Quiz service request failed");

        return Err(QuizError::Service(message));
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        res: reqwest::Response,
        fallback: &str,
    ) -> Result<T, QuizError> {
        let res = self.check(res, fallback).await?;
        let body = res.text().await.map_err(network_err)?;

        return serde_json::from_str::<T>(&body).map_err(|err| {
            tracing::error!(error = ?err, "Failed to decode quiz service response");
            return QuizError::Service(fallback.to_string());
        });
    }
}

#[async_trait]
impl QuizService for HttpQuizService {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<(), QuizError> {
        let res = self.probe("/health").await;
        if let Err(err) = res {
            tracing::debug!(error = ?err, "Falling back to root health probe");
            return self.probe("/").await;
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn generate_quiz(&self, request: &QuizRequest) -> Result<QuizAttempt, QuizError> {
        let res = self
            .client
            .post(self.endpoint("/generate-quiz"))
            .json(request)
            .send()
            .await
            .map_err(network_err)?;

        return self.decode(res, GENERATE_FAILED).await;
    }

    #[allow(clippy::implicit_return)]
    async fn list_quizzes(&self) -> Result<Vec<QuizAttempt>, QuizError> {
        let res = self
            .client
            .get(self.endpoint("/quizzes"))
            .send()
            .await
            .map_err(network_err)?;

        // Rows are decoded one at a time, a malformed quiz only drops itself.
        let rows: Vec<serde_json::Value> = self.decode(res, LIST_FAILED).await?;
        let history = rows
            .into_iter()
            .filter_map(|row| {
                return serde_json::from_value::<QuizAttempt>(row.clone())
                    .map_err(|err| {
                        tracing::warn!(error = ?err, id = ?row.get("id"), "Skipping malformed quiz");
                    })
                    .ok();
            })
            .collect();

        return Ok(history);
    }

    #[allow(clippy::implicit_return)]
    async fn get_quiz(&self, id: AttemptId) -> Result<QuizAttempt, QuizError> {
        let res = self
            .client
            .get(self.endpoint(&format!("/quiz/{id}")))
            .send()
            .await
            .map_err(network_err)?;

        return self.decode(res, FETCH_FAILED).await;
    }

    #[allow(clippy::implicit_return)]
    async fn save_results(&self, id: AttemptId, answers: &Answers) -> Result<(), QuizError> {
        let req = SaveResultsRequest {
            user_answers: answers.clone(),
        };

        let res = self
            .client
            .put(self.endpoint(&format!("/quiz/{id}/save-results")))
            .json(&req)
            .send()
            .await
            .map_err(network_err)?;

        self.check(res, SAVE_FAILED).await?;
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn delete_quiz(&self, id: AttemptId) -> Result<(), QuizError> {
        let res = self
            .client
            .delete(self.endpoint(&format!("/quiz/{id}")))
            .send()
            .await
            .map_err(network_err)?;

        self.check(res, DELETE_FAILED).await?;
        return Ok(());
    }
}
