use ratatui::text::Line;
use test_utils::quiz_fixture;

use super::QuestionList;
use crate::domain::services::QuizSession;

fn to_strings(lines: &[Line]) -> Vec<String> {
    return lines
        .iter()
        .map(|line| {
            return line
                .spans
                .iter()
                .map(|span| return span.content.to_string())
                .collect::<String>();
        })
        .collect();
}

fn session() -> QuizSession {
    let mut session = QuizSession::default();
    session.handle_generated(Ok(serde_json::from_str(quiz_fixture()).unwrap()));
    return session;
}

#[test]
fn it_renders_nothing_without_a_quiz() {
    let session = QuizSession::default();
    let (lines, cursor_line) = QuestionList::new(&session, 0, 0).as_lines(80);

    assert!(lines.is_empty());
    assert_eq!(cursor_line, 0);
}

#[test]
fn it_renders_an_unanswered_quiz_with_the_cursor() {
    let mut session = session();
    session.select_answer(0, "Maida Vale");

    let (lines, cursor_line) = QuestionList::new(&session, 1, 1).as_lines(80);
    let text = to_strings(&lines);

    assert_eq!(cursor_line, 10);
    assert_eq!(text[3], "Q1 [easy]");
    assert_eq!(text[5], "  [x] 1. Maida Vale");
    assert_eq!(text[10], "Q2 [medium]");
    assert_eq!(text[12], "  [ ] 1. Colossus");
    assert_eq!(text[13], "> [ ] 2. The Bombe");
    assert!(text.contains(&"Answered 1 of 3.".to_string()));
    assert!(!text.iter().any(|line| return line.starts_with("Explanation")));
}

#[test]
fn it_prompts_for_submit_once_complete() {
    let mut session = session();
    session.select_answer(0, "Maida Vale");
    session.select_answer(1, "Colossus");
    session.select_answer(2, "The imitation game");

    let (lines, _) = QuestionList::new(&session, 2, 0).as_lines(80);
    let text = to_strings(&lines);

    assert!(text.contains(&"Answered 3 of 3. Press s to submit.".to_string()));
}

#[test]
fn it_renders_revealed_results() {
    let mut session = session();
    session.select_answer(0, "Maida Vale");
    session.select_answer(1, "Colossus");
    session.select_answer(2, "The imitation game");
    session.submit();

    let (lines, _) = QuestionList::new(&session, 0, 0).as_lines(80);

    insta::assert_snapshot!(to_strings(&lines).join("\n"), @r###"
    Alan Turing
    Alan Turing was an English mathematician and computer scientist.

    Q1 [easy] Correct
    Where was Alan Turing born?
      [x] 1. Maida Vale <- answer
      [ ] 2. Manchester
      [ ] 3. Cambridge
      [ ] 4. Bletchley
    Explanation: He was born in Maida Vale, London, in 1912.

    Q2 [medium] Incorrect
    Which machine did Turing help design to break Enigma?
      [x] 1. Colossus <- yours
      [ ] 2. The Bombe <- answer
    Explanation: The Bombe was an electromechanical device used at Bletchley Park.

    Q3 [hard] Correct
    What is the name of Turing's test for machine intelligence?
      [x] 1. The imitation game <- answer
      [ ] 2. The halting game
      [ ] 3. The decision game
      [ ] 4. The Enigma game
    Explanation: Turing described the imitation game in his 1950 paper.

    You scored 2 out of 3

    Related topics: Enigma machine, Bletchley Park, Turing machine
    "###);
}

#[test]
fn it_wraps_long_text_to_the_width() {
    let session = session();
    let (lines, _) = QuestionList::new(&session, 0, 0).as_lines(30);
    let text = to_strings(&lines);

    assert!(text.iter().all(|line| return line.chars().count() <= 30));
    assert_eq!(text[1], "Alan Turing was an English");
}
