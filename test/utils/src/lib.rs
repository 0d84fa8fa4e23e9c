/// A generated quiz as returned by `POST /generate-quiz`, before it has been
/// answered.
pub fn quiz_fixture() -> &'static str {
    return r#"
{
  "id": 7,
  "url": "https://en.wikipedia.org/wiki/Alan_Turing",
  "title": "Alan Turing",
  "summary": "Alan Turing was an English mathematician and computer scientist.",
  "data": {
    "quiz": [
      {
        "question": "Where was Alan Turing born?",
        "options": ["Maida Vale", "Manchester", "Cambridge", "Bletchley"],
        "answer": "Maida Vale",
        "explanation": "He was born in Maida Vale, London, in 1912.",
        "difficulty": "easy"
      },
      {
        "question": "Which machine did Turing help design to break Enigma?",
        "options": ["Colossus", "The Bombe"],
        "answer": "The Bombe",
        "explanation": "The Bombe was an electromechanical device used at Bletchley Park.",
        "difficulty": "medium"
      },
      {
        "question": "What is the name of Turing's test for machine intelligence?",
        "options": ["The imitation game", "The halting game", "The decision game", "The Enigma game"],
        "answer": "The imitation game",
        "explanation": "Turing described the imitation game in his 1950 paper.",
        "difficulty": "hard"
      }
    ],
    "related_topics": ["Enigma machine", "Bletchley Park", "Turing machine"]
  },
  "user_answers": null,
  "created_at": "2024-03-05T14:22:10.123456"
}
"#
    .trim();
}

/// The payload of `GET /quizzes`: one attempt with saved answers and one
/// without.
pub fn history_fixture() -> &'static str {
    return r#"
[
  {
    "id": 3,
    "url": "https://en.wikipedia.org/wiki/Ada_Lovelace",
    "title": "Ada Lovelace",
    "summary": "Ada Lovelace was an English mathematician.",
    "data": {
      "quiz": [
        {
          "question": "Which machine did Lovelace write about?",
          "options": ["Analytical Engine", "Difference Engine"],
          "answer": "Analytical Engine",
          "explanation": "Her notes describe the Analytical Engine.",
          "difficulty": "easy"
        },
        {
          "question": "Who was her father?",
          "options": ["Lord Byron", "Charles Babbage"],
          "answer": "Lord Byron",
          "explanation": "She was the only legitimate child of Lord Byron.",
          "difficulty": "medium"
        }
      ]
    },
    "user_answers": {"0": "Analytical Engine", "1": "Charles Babbage"},
    "created_at": "2024-02-01T09:00:00"
  },
  {
    "id": 4,
    "url": "https://en.wikipedia.org/wiki/Grace_Hopper",
    "title": null,
    "summary": null,
    "data": {
      "quiz": [
        {
          "question": "Which language did Hopper's work lead to?",
          "options": ["COBOL", "Fortran"],
          "answer": "COBOL",
          "explanation": "FLOW-MATIC was a direct influence on COBOL.",
          "difficulty": "easy"
        }
      ],
      "related_topics": null
    },
    "user_answers": {},
    "created_at": "2024-02-02T10:30:00+00:00"
  }
]
"#
    .trim();
}
