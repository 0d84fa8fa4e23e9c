use super::Answers;
use super::AttemptId;
use super::QuizRequest;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SaveKind {
    Progress,
    Results,
}

/// Which surface a delete was requested from. The outcome differs: a history
/// entry is dropped from the list, an open attempt resets the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeleteTarget {
    HistoryEntry(AttemptId),
    ActiveAttempt(AttemptId),
}

impl DeleteTarget {
    pub fn id(&self) -> AttemptId {
        match self {
            DeleteTarget::HistoryEntry(id) => return *id,
            DeleteTarget::ActiveAttempt(id) => return *id,
        }
    }
}

/// Effects requested by session transitions, executed against the quiz
/// service by the actions worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    DeleteAttempt(DeleteTarget),
    FetchAttempt(AttemptId),
    FetchHistory(),
    GenerateQuiz(QuizRequest),
    HealthCheck(),
    SaveAnswers(AttemptId, Answers, SaveKind),
}
