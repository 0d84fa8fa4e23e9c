use std::sync::Arc;
use std::sync::Mutex;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use test_utils::history_fixture;
use test_utils::quiz_fixture;
use tokio::sync::mpsc;

use super::help_text;
use super::ActionsService;
use crate::domain::models::Action;
use crate::domain::models::Answers;
use crate::domain::models::AttemptId;
use crate::domain::models::DeleteTarget;
use crate::domain::models::Event;
use crate::domain::models::QuizAttempt;
use crate::domain::models::QuizError;
use crate::domain::models::QuizRequest;
use crate::domain::models::QuizService;
use crate::domain::models::QuizServiceBox;
use crate::domain::models::SaveKind;

#[derive(Default)]
struct FakeService {
    calls: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeService {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn result(&self) -> Result<(), QuizError> {
        if self.fail {
            return Err(QuizError::Service("nope".to_string()));
        }

        return Ok(());
    }
}

#[async_trait]
impl QuizService for FakeService {
    async fn health_check(&self) -> Result<(), QuizError> {
        self.record("health".to_string());
        return self.result();
    }

    async fn generate_quiz(&self, request: &QuizRequest) -> Result<QuizAttempt, QuizError> {
        self.record(format!("generate {}", serde_json::to_string(request).unwrap()));
        self.result()?;
        return Ok(serde_json::from_str(quiz_fixture()).unwrap());
    }

    async fn list_quizzes(&self) -> Result<Vec<QuizAttempt>, QuizError> {
        self.record("list".to_string());
        self.result()?;
        return Ok(serde_json::from_str(history_fixture()).unwrap());
    }

    async fn get_quiz(&self, id: AttemptId) -> Result<QuizAttempt, QuizError> {
        self.record(format!("get {id}"));
        self.result()?;
        return Ok(serde_json::from_str(quiz_fixture()).unwrap());
    }

    async fn save_results(&self, id: AttemptId, answers: &Answers) -> Result<(), QuizError> {
        self.record(format!("save {id} {}", answers.len()));
        return self.result();
    }

    async fn delete_quiz(&self, id: AttemptId) -> Result<(), QuizError> {
        self.record(format!("delete {id}"));
        return self.result();
    }
}

fn service(fake: &Arc<FakeService>) -> QuizServiceBox {
    return fake.clone();
}

#[tokio::test]
async fn it_generates_quizzes() -> Result<()> {
    let fake = Arc::new(FakeService::default());
    let event = ActionsService::run(
        service(&fake),
        Action::GenerateQuiz(QuizRequest::Topic("Turing".to_string())),
    )
    .await;

    match event {
        Event::QuizGenerated(Ok(attempt)) => assert_eq!(attempt.id, Some(7)),
        _ => bail!("Wrong enum"),
    }
    assert_eq!(
        *fake.calls.lock().unwrap(),
        vec![r#"generate {"topic":"Turing"}"#.to_string()]
    );

    return Ok(());
}

#[tokio::test]
async fn it_passes_delete_targets_through() -> Result<()> {
    let fake = Arc::new(FakeService {
        fail: true,
        ..FakeService::default()
    });
    let event = ActionsService::run(
        service(&fake),
        Action::DeleteAttempt(DeleteTarget::ActiveAttempt(9)),
    )
    .await;

    match event {
        Event::AttemptDeleted(target, res) => {
            assert_eq!(target, DeleteTarget::ActiveAttempt(9));
            assert_eq!(res, Err(QuizError::Service("nope".to_string())));
        }
        _ => bail!("Wrong enum"),
    }
    assert_eq!(*fake.calls.lock().unwrap(), vec!["delete 9".to_string()]);

    return Ok(());
}

#[tokio::test]
async fn it_saves_answers_with_their_kind() -> Result<()> {
    let fake = Arc::new(FakeService::default());
    let mut answers = Answers::new();
    answers.insert(0, "Maida Vale".to_string());

    let event = ActionsService::run(
        service(&fake),
        Action::SaveAnswers(7, answers, SaveKind::Progress),
    )
    .await;

    match event {
        Event::AnswersSaved(kind, res) => {
            assert_eq!(kind, SaveKind::Progress);
            assert!(res.is_ok());
        }
        _ => bail!("Wrong enum"),
    }
    assert_eq!(*fake.calls.lock().unwrap(), vec!["save 7 1".to_string()]);

    return Ok(());
}

#[tokio::test]
async fn it_runs_queued_actions() -> Result<()> {
    let fake = Arc::new(FakeService::default());
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    action_tx.send(Action::HealthCheck())?;
    action_tx.send(Action::FetchHistory())?;
    drop(action_tx);

    ActionsService::start(service(&fake), event_tx, &mut action_rx).await?;

    let mut health_checked = false;
    let mut history_len = 0;
    for _ in 0..2 {
        match event_rx.recv().await {
            Some(Event::HealthChecked(res)) => {
                assert!(res.is_ok());
                health_checked = true;
            }
            Some(Event::HistoryFetched(res)) => {
                history_len = res?.len();
            }
            _ => bail!("Wrong enum"),
        }
    }

    assert!(health_checked);
    assert_eq!(history_len, 2);

    return Ok(());
}

#[test]
fn it_documents_every_quiz_key() {
    let text = help_text();
    for hint in ["- s - Submit", "- p - Save progress", "- d - Delete", "CTRL+L"] {
        assert!(text.contains(hint), "missing {hint}");
    }
}
