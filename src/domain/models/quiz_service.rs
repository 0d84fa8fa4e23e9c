use std::sync::Arc;

use async_trait::async_trait;

use super::Answers;
use super::AttemptId;
use super::QuizAttempt;
use super::QuizError;
use super::QuizRequest;

#[async_trait]
pub trait QuizService {
    /// Probes the service for connectivity. Implementations may try more than
    /// one endpoint before giving up.
    async fn health_check(&self) -> Result<(), QuizError>;

    /// Asks the service to generate a new quiz for a topic or article URL.
    /// Generation can take a long time, no timeout is applied.
    async fn generate_quiz(&self, request: &QuizRequest) -> Result<QuizAttempt, QuizError>;

    /// Lists every saved attempt.
    async fn list_quizzes(&self) -> Result<Vec<QuizAttempt>, QuizError>;

    async fn get_quiz(&self, id: AttemptId) -> Result<QuizAttempt, QuizError>;

    /// Persists answers for an attempt. Used both for in-progress saves and
    /// for final results.
    async fn save_results(&self, id: AttemptId, answers: &Answers) -> Result<(), QuizError>;

    async fn delete_quiz(&self, id: AttemptId) -> Result<(), QuizError>;
}

pub type QuizServiceBox = Arc<dyn QuizService + Send + Sync>;
