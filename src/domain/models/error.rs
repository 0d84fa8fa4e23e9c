use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Please enter a Topic or Wikipedia URL")]
    Validation,
    #[error("{0}")]
    Service(String),
    #[error("Unable to reach the quiz service: {0}")]
    Network(String),
}
