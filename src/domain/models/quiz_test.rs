use anyhow::Result;
use test_utils::history_fixture;
use test_utils::quiz_fixture;

use super::score;
use super::Answers;
use super::Question;
use super::QuizAttempt;
use super::QuizRequest;
use super::SaveResultsRequest;

fn question(options: &[&str], answer: &str) -> Question {
    return Question {
        text: "?".to_string(),
        options: options.iter().map(|e| return e.to_string()).collect(),
        correct_answer: answer.to_string(),
        explanation: "".to_string(),
        difficulty: "easy".to_string(),
    };
}

fn answers(entries: &[(usize, &str)]) -> Answers {
    return entries
        .iter()
        .map(|(idx, answer)| return (*idx, answer.to_string()))
        .collect();
}

#[test]
fn it_classifies_wikipedia_urls() -> Result<()> {
    let req = QuizRequest::from_input("https://en.wikipedia.org/wiki/Test");
    assert_eq!(
        req,
        QuizRequest::Url("https://en.wikipedia.org/wiki/Test".to_string())
    );
    insta::assert_snapshot!(serde_json::to_string(&req)?, @r###"{"url":"https://en.wikipedia.org/wiki/Test"}"###);

    return Ok(());
}

#[test]
fn it_classifies_everything_else_as_topics() -> Result<()> {
    let req = QuizRequest::from_input("Photosynthesis");
    assert_eq!(req, QuizRequest::Topic("Photosynthesis".to_string()));
    insta::assert_snapshot!(serde_json::to_string(&req)?, @r###"{"topic":"Photosynthesis"}"###);

    let other_site = QuizRequest::from_input("https://example.org/wiki/Test");
    assert_eq!(
        other_site,
        QuizRequest::Topic("https://example.org/wiki/Test".to_string())
    );

    return Ok(());
}

#[test]
fn it_scores_index_wise_matches() {
    let questions = vec![question(&["A", "B", "C", "D"], "B"), question(&["E", "F"], "F")];
    assert_eq!(score(&questions, &answers(&[(0, "B"), (1, "E")])), 1);
    assert_eq!(score(&questions, &answers(&[(0, "B"), (1, "F")])), 2);
}

#[test]
fn it_scores_unanswered_as_wrong() {
    let questions = vec![question(&["A", "B"], "A"), question(&["C", "D"], "D")];
    assert_eq!(score(&questions, &answers(&[(1, "D")])), 1);
    assert_eq!(score(&questions, &Answers::new()), 0);
}

#[test]
fn it_ignores_out_of_range_answers_when_scoring() {
    let questions = vec![question(&["A", "B"], "A")];
    let base = answers(&[(0, "A")]);
    let extra = answers(&[(0, "A"), (1, "A"), (42, "B")]);

    assert_eq!(score(&questions, &base), 1);
    assert_eq!(score(&questions, &extra), score(&questions, &base));
}

#[test]
fn it_deserializes_generated_quiz() -> Result<()> {
    let attempt: QuizAttempt = serde_json::from_str(quiz_fixture())?;

    assert_eq!(attempt.id, Some(7));
    assert_eq!(attempt.display_title(), "Alan Turing");
    assert_eq!(attempt.questions().len(), 3);
    assert_eq!(attempt.questions()[1].correct_answer, "The Bombe");
    assert_eq!(attempt.questions()[2].difficulty, "hard");
    assert_eq!(attempt.related_topics().len(), 3);
    assert_eq!(attempt.saved_answers, None);
    assert_eq!(attempt.created_date(), Some("2024-03-05".to_string()));

    return Ok(());
}

#[test]
fn it_deserializes_history_with_string_answer_keys() -> Result<()> {
    let history: Vec<QuizAttempt> = serde_json::from_str(history_fixture())?;

    assert_eq!(history.len(), 2);
    assert_eq!(
        history[0].seeded_answers(),
        answers(&[(0, "Analytical Engine"), (1, "Charles Babbage")])
    );
    assert!(history[1].seeded_answers().is_empty());
    assert!(history[1].related_topics().is_empty());
    assert_eq!(
        history[1].display_title(),
        "https://en.wikipedia.org/wiki/Grace_Hopper"
    );
    assert_eq!(history[1].created_date(), Some("2024-02-02".to_string()));

    return Ok(());
}

#[test]
fn it_drops_saved_answers_outside_the_question_range() {
    let attempt = QuizAttempt {
        data: super::QuizContent {
            quiz: vec![question(&["A", "B"], "A")],
            related_topics: None,
        },
        saved_answers: Some(answers(&[(0, "A"), (5, "B")])),
        ..QuizAttempt::default()
    };

    assert_eq!(attempt.seeded_answers(), answers(&[(0, "A")]));
}

#[test]
fn it_falls_back_to_a_placeholder_title() {
    let attempt = QuizAttempt {
        title: Some("  ".to_string()),
        ..QuizAttempt::default()
    };

    assert_eq!(attempt.display_title(), "Untitled quiz");
    assert_eq!(attempt.created_date(), None);
}

#[test]
fn it_serializes_save_requests_with_string_keys() -> Result<()> {
    let req = SaveResultsRequest {
        user_answers: answers(&[(0, "B"), (1, "E")]),
    };

    insta::assert_snapshot!(serde_json::to_string(&req)?, @r###"{"user_answers":{"0":"B","1":"E"}}"###);

    return Ok(());
}
