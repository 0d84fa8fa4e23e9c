#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::QuizServiceBox;

pub fn help_text() -> String {
    let text = r#"
INPUT:
- Enter - Generate a quiz from the typed topic or Wikipedia URL.

QUIZ:
- Up/Down - Move between options.
- Left/Right/Tab - Move between questions.
- Enter, 1-9 - Select an option.
- s - Submit once every question is answered.
- p - Save progress.
- v - Save results after submitting.
- n - Start a new quiz.
- d - Delete the open quiz.

HISTORY:
- Up/Down - Move between saved quizzes.
- Enter - Open the selected quiz.
- d - Delete the selected quiz.
- Esc - Close history.

HOTKEYS:
- CTRL+L - Toggle history.
- CTRL+C - Exit.
        "#;

    return text.trim().to_string();
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs one action against the service and wraps the outcome in the event
    /// the UI expects for it.
    pub async fn run(service: QuizServiceBox, action: Action) -> Event {
        match action {
            Action::DeleteAttempt(target) => {
                let res = service.delete_quiz(target.id()).await;
                return Event::AttemptDeleted(target, res);
            }
            Action::FetchAttempt(id) => {
                return Event::AttemptFetched(service.get_quiz(id).await);
            }
            Action::FetchHistory() => {
                return Event::HistoryFetched(service.list_quizzes().await);
            }
            Action::GenerateQuiz(request) => {
                return Event::QuizGenerated(service.generate_quiz(&request).await);
            }
            Action::HealthCheck() => {
                return Event::HealthChecked(service.health_check().await);
            }
            Action::SaveAnswers(id, answers, kind) => {
                let res = service.save_results(id, &answers).await;
                return Event::AnswersSaved(kind, res);
            }
        }
    }

    /// Executes actions until the sending side closes. Each action gets its own
    /// task so a slow generation never holds up a history refresh.
    pub async fn start(
        service: QuizServiceBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            tracing::debug!(action = ?action, "Dispatching action");

            let worker_service = service.clone();
            let worker_tx = tx.clone();
            tokio::spawn(async move {
                let event = ActionsService::run(worker_service, action).await;
                if worker_tx.send(event).is_err() {
                    tracing::warn!("UI closed before an action completed");
                }
            });
        }

        return Ok(());
    }
}
