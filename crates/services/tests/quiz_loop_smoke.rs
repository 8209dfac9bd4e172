use std::sync::Arc;

use course_services::{InMemoryGateway, QuizContent, QuizLoopService, Shuffle};
use quiz_core::model::{QuestionDraft, QuizId};

fn three_question_quiz() -> QuizContent {
    QuizContent {
        id: QuizId::new("quiz-smoke"),
        course_title: "Smoke Course".into(),
        questions: vec![
            QuestionDraft::new("Q1", ["A", "B", "C"], "A"),
            QuestionDraft::new("Q2", ["A", "B", "C"], "B"),
            QuestionDraft::new("Q3", ["A", "B", "C"], "C"),
        ],
    }
}

#[tokio::test]
async fn quiz_loop_submits_summary() {
    let gateway = InMemoryGateway::new();
    gateway.insert_quiz(three_question_quiz()).unwrap();

    let loop_svc =
        QuizLoopService::new(Arc::new(gateway.clone())).with_shuffle(Shuffle::Disabled);

    let mut quiz = loop_svc
        .start_quiz(&QuizId::new("quiz-smoke"))
        .await
        .unwrap();
    for choice in ["A", "X", "C"] {
        let result = loop_svc.answer_current(&mut quiz, choice).unwrap();
        if result.progress.is_last {
            break;
        }
        assert!(loop_svc.next(&mut quiz).moved);
    }
    assert!(quiz.progress().is_complete);

    let submitted = loop_svc.submit(&quiz).await.unwrap();
    assert_eq!(submitted.summary.correct_count(), 2);
    assert_eq!(submitted.summary.wrong_count(), 1);
    assert_eq!(submitted.summary.score_percent(), 67);
    assert_eq!(submitted.receipt.message.as_deref(), Some("Quiz submitted"));

    let posted = gateway.submissions().unwrap();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].quiz_id, QuizId::new("quiz-smoke"));
    assert_eq!(posted[0].marks, 2);
    assert_eq!(posted[0].recount_correct(), 2);
    let users: Vec<_> = posted[0].answers.iter().map(|a| a.user_answer.as_str()).collect();
    assert_eq!(users, ["A", "X", "C"]);
}

#[tokio::test]
async fn shuffled_quiz_scores_the_same() {
    let gateway = InMemoryGateway::new();
    gateway.insert_quiz(three_question_quiz()).unwrap();
    let loop_svc = QuizLoopService::new(Arc::new(gateway.clone())).with_shuffle(Shuffle::seeded(42));

    let mut quiz = loop_svc
        .start_quiz(&QuizId::new("quiz-smoke"))
        .await
        .unwrap();

    // answer every question correctly regardless of presentation order
    loop {
        let correct = quiz
            .session()
            .current_question()
            .unwrap()
            .correct_option()
            .to_owned();
        loop_svc.answer_current(&mut quiz, &correct).unwrap();
        if !loop_svc.next(&mut quiz).moved {
            break;
        }
    }

    let submitted = loop_svc.submit(&quiz).await.unwrap();
    assert_eq!(submitted.summary.score_percent(), 100);

    let presented: Vec<_> = quiz
        .session()
        .questions()
        .iter()
        .map(|q| q.prompt().to_owned())
        .collect();
    let reviewed: Vec<_> = submitted
        .summary
        .transcript()
        .iter()
        .map(|e| e.prompt.clone())
        .collect();
    assert_eq!(presented, reviewed);
}

#[tokio::test]
async fn resubmitting_after_a_change_of_mind_keeps_one_answer_per_question() {
    let gateway = InMemoryGateway::new();
    gateway.insert_quiz(three_question_quiz()).unwrap();
    let loop_svc = QuizLoopService::new(Arc::new(gateway.clone())).with_shuffle(Shuffle::Disabled);

    let mut quiz = loop_svc
        .start_quiz(&QuizId::new("quiz-smoke"))
        .await
        .unwrap();
    loop_svc.answer_current(&mut quiz, "B").unwrap();
    loop_svc.answer_current(&mut quiz, "A").unwrap();
    loop_svc.next(&mut quiz);
    loop_svc.answer_current(&mut quiz, "B").unwrap();
    loop_svc.next(&mut quiz);
    loop_svc.answer_current(&mut quiz, "C").unwrap();

    let submitted = loop_svc.submit(&quiz).await.unwrap();
    assert_eq!(submitted.summary.total_questions(), 3);
    assert_eq!(submitted.summary.score_percent(), 100);
}

#[tokio::test]
async fn going_back_to_fix_an_answer_changes_the_score() {
    let gateway = InMemoryGateway::new();
    gateway.insert_quiz(three_question_quiz()).unwrap();
    let loop_svc = QuizLoopService::new(Arc::new(gateway.clone())).with_shuffle(Shuffle::Disabled);

    let mut quiz = loop_svc
        .start_quiz(&QuizId::new("quiz-smoke"))
        .await
        .unwrap();
    for choice in ["A", "X", "C"] {
        loop_svc.answer_current(&mut quiz, choice).unwrap();
        loop_svc.next(&mut quiz);
    }

    let step = loop_svc.back(&mut quiz);
    assert!(step.moved);
    assert_eq!(step.progress.position, 1);
    assert!(!step.progress.is_complete);
    loop_svc.answer_current(&mut quiz, "B").unwrap();

    let step = loop_svc.next(&mut quiz);
    assert!(step.progress.is_complete);

    let submitted = loop_svc.submit(&quiz).await.unwrap();
    assert_eq!(submitted.summary.score_percent(), 100);
    assert_eq!(gateway.submissions().unwrap()[0].marks, 3);
}
