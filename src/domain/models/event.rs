use tui_textarea::Input;

use super::DeleteTarget;
use super::QuizAttempt;
use super::QuizError;
use super::SaveKind;

pub enum Event {
    AnswersSaved(SaveKind, Result<(), QuizError>),
    AttemptDeleted(DeleteTarget, Result<(), QuizError>),
    AttemptFetched(Result<QuizAttempt, QuizError>),
    HealthChecked(Result<(), QuizError>),
    HistoryFetched(Result<Vec<QuizAttempt>, QuizError>),
    QuizGenerated(Result<QuizAttempt, QuizError>),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLL(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardPaste(String),
    UIResize(),
    UITick(),
}
