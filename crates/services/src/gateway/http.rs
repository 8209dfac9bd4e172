use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use quiz_core::model::{
    CourseChapter, CourseId, CourseListing, Flashcard, FlashcardSetId, QuizId, QuizSubmission,
};

use super::wire::{
    CompleteChapterRequest, CourseContentResponse, CoursesResponse, FlashcardSetsResponse,
    FlashcardsResponse, MessageBody, QuizResponse,
};
use super::{CourseGateway, FlashcardSet, QuizContent, Receipt};
use crate::config::ApiConfig;
use crate::error::{ConfigError, GatewayError};

const QUIZ_CONTENT: &str = "courses/get-single-quiz";
const QUIZ_SUBMIT: &str = "courses/quiz-submit";
const ENROLLED_COURSES: &str = "courses/get-enrolled-courses";
const COMPLETE_CHAPTER: &str = "courses/complete-course-chapter";
const COURSE_CONTENT: &str = "courses/get-course-content";
const FLASHCARD_SETS: &str = "courses/get-all-flashcards";
const FLASHCARD_CONTENT: &str = "courses/get-single-flashcard";

/// `CourseGateway` over the course service's REST api.
#[derive(Clone)]
pub struct HttpCourseGateway {
    client: Client,
    config: ApiConfig,
}

impl HttpCourseGateway {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Build a gateway from `LEARN_API_URL` / `LEARN_API_TOKEN`.
    ///
    /// Returns `Ok(None)` when no url is configured.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the configured url is invalid.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        Ok(ApiConfig::from_env()?.map(Self::new))
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        let response = Self::check(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn read_receipt(response: Response) -> Result<Receipt, GatewayError> {
        let response = Self::check(response).await?;
        let body = response.text().await?;
        let message = serde_json::from_str::<MessageBody>(&body)
            .ok()
            .and_then(|b| b.message);
        Ok(Receipt { message })
    }

    async fn check(response: Response) -> Result<Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        let message = MessageBody::extract(&body);
        warn!(%status, %url, %message, "course service request failed");
        Err(GatewayError::HttpStatus { status, message })
    }
}

#[async_trait]
impl CourseGateway for HttpCourseGateway {
    async fn fetch_quiz(&self, quiz_id: &QuizId) -> Result<QuizContent, GatewayError> {
        let url = self
            .config
            .resource_endpoint(QUIZ_CONTENT, quiz_id.as_str())
            .ok_or_else(|| GatewayError::QuizNotFound(quiz_id.clone()))?;
        debug!(%quiz_id, "fetching quiz");

        let response = self.authorize(self.client.get(url)).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(GatewayError::QuizNotFound(quiz_id.clone()));
        }
        let body: QuizResponse = Self::read_json(response).await?;
        Ok(body.into_content(quiz_id.clone()))
    }

    async fn submit_quiz(&self, submission: &QuizSubmission) -> Result<Receipt, GatewayError> {
        let url = self.config.endpoint(QUIZ_SUBMIT);
        debug!(quiz_id = %submission.quiz_id, marks = submission.marks, "submitting quiz");

        let response = self
            .authorize(self.client.post(url))
            .json(submission)
            .send()
            .await?;
        Self::read_receipt(response).await
    }

    async fn list_enrolled_courses(&self) -> Result<Vec<CourseListing>, GatewayError> {
        let url = self.config.endpoint(ENROLLED_COURSES);
        debug!("listing enrolled courses");

        let response = self.authorize(self.client.get(url)).send().await?;
        let body: CoursesResponse = Self::read_json(response).await?;
        Ok(body.courses.into_iter().map(CourseListing::from).collect())
    }

    async fn complete_chapter(
        &self,
        course_id: &CourseId,
        chapter_index: u32,
    ) -> Result<Receipt, GatewayError> {
        let url = self.config.endpoint(COMPLETE_CHAPTER);
        debug!(%course_id, chapter_index, "completing chapter");

        let response = self
            .authorize(self.client.put(url))
            .json(&CompleteChapterRequest {
                course_id: course_id.as_str(),
                chapter_id: chapter_index,
            })
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(GatewayError::CourseNotFound(course_id.clone()));
        }
        Self::read_receipt(response).await
    }

    async fn fetch_course_chapters(
        &self,
        course_id: &CourseId,
    ) -> Result<Vec<CourseChapter>, GatewayError> {
        let url = self
            .config
            .resource_endpoint(COURSE_CONTENT, course_id.as_str())
            .ok_or_else(|| GatewayError::CourseNotFound(course_id.clone()))?;
        debug!(%course_id, "fetching course content");

        let response = self.authorize(self.client.get(url)).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(GatewayError::CourseNotFound(course_id.clone()));
        }
        let body: CourseContentResponse = Self::read_json(response).await?;
        Ok(body.course.chapters.into_iter().map(CourseChapter::from).collect())
    }

    async fn list_flashcard_sets(&self) -> Result<Vec<FlashcardSet>, GatewayError> {
        let url = self.config.endpoint(FLASHCARD_SETS);
        debug!("listing flashcard sets");

        let response = self.authorize(self.client.get(url)).send().await?;
        let body: FlashcardSetsResponse = Self::read_json(response).await?;
        Ok(body.flashcards.into_iter().map(FlashcardSet::from).collect())
    }

    async fn fetch_flashcards(
        &self,
        set_id: &FlashcardSetId,
    ) -> Result<Vec<Flashcard>, GatewayError> {
        let url = self
            .config
            .resource_endpoint(FLASHCARD_CONTENT, set_id.as_str())
            .ok_or_else(|| GatewayError::FlashcardSetNotFound(set_id.clone()))?;
        debug!(%set_id, "fetching flashcards");

        let response = self.authorize(self.client.get(url)).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(GatewayError::FlashcardSetNotFound(set_id.clone()));
        }
        let body: FlashcardsResponse = Self::read_json(response).await?;
        Ok(body.flashcard_detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_built_from_base_url() {
        let gateway =
            HttpCourseGateway::new(ApiConfig::new("https://example.test/api", None).unwrap());
        let config = gateway.config();
        assert_eq!(
            config.resource_endpoint(QUIZ_CONTENT, "abc").unwrap().as_str(),
            "https://example.test/api/courses/get-single-quiz/abc"
        );
        assert_eq!(
            config.endpoint(QUIZ_SUBMIT).as_str(),
            "https://example.test/api/courses/quiz-submit"
        );
        assert_eq!(
            config.resource_endpoint(COURSE_CONTENT, "c1").unwrap().as_str(),
            "https://example.test/api/courses/get-course-content/c1"
        );
        assert_eq!(
            config.resource_endpoint(FLASHCARD_CONTENT, "f/1").unwrap().as_str(),
            "https://example.test/api/courses/get-single-flashcard/f%2F1"
        );
    }

    #[tokio::test]
    async fn dot_quiz_id_is_not_found_without_a_request() {
        // nothing listens here; the id is rejected before any request is made
        let gateway =
            HttpCourseGateway::new(ApiConfig::new("http://127.0.0.1:9/api", None).unwrap());
        let err = gateway.fetch_quiz(&QuizId::new("..")).await.unwrap_err();
        assert!(matches!(err, GatewayError::QuizNotFound(_)));
    }
}
