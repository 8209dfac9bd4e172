//! JSON shapes spoken by the course service.

use serde::{Deserialize, Serialize};

use quiz_core::model::{
    ChapterPage, CourseChapter, CourseId, CourseListing, CourseProgress, Flashcard,
    FlashcardSetId, QuestionDraft, QuizId,
};

use super::{FlashcardSet, QuizContent};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuizResponse {
    #[serde(default)]
    pub course_title: Option<String>,
    #[serde(default)]
    pub quiz_detail: Vec<QuestionDraft>,
}

impl QuizResponse {
    pub(crate) fn into_content(self, id: QuizId) -> QuizContent {
        QuizContent {
            id,
            course_title: self.course_title.unwrap_or_default(),
            questions: self.quiz_detail,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CoursesResponse {
    #[serde(default)]
    pub courses: Vec<Course>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    pub course_title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub chapters_count: u32,
    #[serde(default)]
    pub completed_chapters_count: u32,
    #[serde(default)]
    pub completed_chapter: Vec<u32>,
}

impl From<Course> for CourseListing {
    fn from(course: Course) -> Self {
        CourseListing {
            id: CourseId::new(course.id),
            title: course.course_title,
            category: course.category,
            difficulty: course.difficulty,
            progress: CourseProgress::new(course.chapters_count, course.completed_chapters_count),
            completed_chapter_indices: course.completed_chapter,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CourseContentResponse {
    pub course: CourseContent,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CourseContent {
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Chapter {
    #[serde(default)]
    pub chapter_name: String,
    #[serde(default)]
    pub content: Vec<ChapterPage>,
}

impl From<Chapter> for CourseChapter {
    fn from(chapter: Chapter) -> Self {
        CourseChapter {
            name: chapter.chapter_name,
            pages: chapter.content,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlashcardSetsResponse {
    #[serde(default)]
    pub flashcards: Vec<FlashcardSetEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FlashcardSetEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub course_title: String,
    #[serde(default)]
    pub flashcards_count: u32,
}

impl From<FlashcardSetEntry> for FlashcardSet {
    fn from(entry: FlashcardSetEntry) -> Self {
        FlashcardSet {
            id: FlashcardSetId::new(entry.id),
            course_title: entry.course_title,
            cards_count: entry.flashcards_count,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FlashcardsResponse {
    #[serde(default)]
    pub flashcard_detail: Vec<Flashcard>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CompleteChapterRequest<'a> {
    pub course_id: &'a str,
    pub chapter_id: u32,
}

/// Body the service attaches to both successes and failures.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageBody {
    /// Pull `message` out of a raw body, falling back to the trimmed text itself.
    pub(crate) fn extract(raw: &str) -> String {
        serde_json::from_str::<MessageBody>(raw)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| raw.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_response_maps_correct_answer_field() {
        let raw = r#"{
            "quizDetail": [
                {"question": "Borrow checker?", "options": ["yes", "no"], "correctAns": "yes"}
            ]
        }"#;
        let parsed: QuizResponse = serde_json::from_str(raw).unwrap();
        let content = parsed.into_content(QuizId::new("q1"));

        assert_eq!(content.id, QuizId::new("q1"));
        assert_eq!(content.course_title, "");
        assert_eq!(content.questions.len(), 1);
        assert_eq!(content.questions[0].prompt, "Borrow checker?");
        assert_eq!(content.questions[0].correct_option, "yes");
    }

    #[test]
    fn course_maps_progress_fields() {
        let raw = r#"{"courses": [{
            "_id": "c1",
            "courseTitle": "Rust",
            "category": "Tech & Coding",
            "difficulty": "Beginner",
            "chaptersCount": 5,
            "completedChaptersCount": 2,
            "completedChapter": [0, 1],
            "banner_image": "ignored.png"
        }]}"#;
        let parsed: CoursesResponse = serde_json::from_str(raw).unwrap();
        let listing: CourseListing = parsed.courses.into_iter().next().unwrap().into();

        assert_eq!(listing.id, CourseId::new("c1"));
        assert_eq!(listing.progress, CourseProgress::new(5, 2));
        assert_eq!(listing.resume_chapter(), Some(2));
    }

    #[test]
    fn course_content_maps_chapters_and_pages() {
        let raw = r#"{"course": {
            "_id": "c1",
            "chapters": [{
                "chapterName": "Ownership",
                "content": [
                    {"topic": "Moves", "explain": "Values move", "code": "let b = a;", "example": "a is gone"},
                    {"topic": "Borrows", "explain": "References borrow"}
                ]
            }]
        }}"#;
        let parsed: CourseContentResponse = serde_json::from_str(raw).unwrap();
        let chapters: Vec<CourseChapter> =
            parsed.course.chapters.into_iter().map(Into::into).collect();

        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].name, "Ownership");
        assert_eq!(chapters[0].pages[0].code, "let b = a;");
        assert_eq!(chapters[0].pages[1].example, "");
        assert_eq!(chapters[0].pages[1].narration(), "Borrows. References borrow");
    }

    #[test]
    fn flashcard_shapes() {
        let sets: FlashcardSetsResponse = serde_json::from_str(
            r#"{"flashcards": [{"_id": "f1", "courseTitle": "Rust", "flashcardsCount": 2}]}"#,
        )
        .unwrap();
        let set: FlashcardSet = sets.flashcards.into_iter().next().unwrap().into();
        assert_eq!(set.id, FlashcardSetId::new("f1"));
        assert_eq!(set.cards_count, 2);

        let cards: FlashcardsResponse = serde_json::from_str(
            r#"{"flashcardDetail": [{"front": "Box", "back": "heap pointer"}]}"#,
        )
        .unwrap();
        assert_eq!(cards.flashcard_detail, vec![Flashcard::new("Box", "heap pointer")]);
    }

    #[test]
    fn complete_chapter_request_shape() {
        let body = CompleteChapterRequest {
            course_id: "c1",
            chapter_id: 3,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["courseId"], "c1");
        assert_eq!(json["chapterId"], 3);
    }

    #[test]
    fn message_extraction() {
        assert_eq!(MessageBody::extract(r#"{"message":"Quiz submitted"}"#), "Quiz submitted");
        assert_eq!(MessageBody::extract("  Bad Gateway "), "Bad Gateway");
        assert_eq!(MessageBody::extract(r#"{"other":1}"#), r#"{"other":1}"#);
    }
}
