use std::sync::Arc;

use tracing::debug;

use quiz_core::model::{CourseChapter, CourseId, CourseListing, CourseQuery};

use crate::error::{CourseServiceError, GatewayError};
use crate::gateway::{CourseGateway, Receipt};

/// Course list and chapter progress on top of a `CourseGateway`.
#[derive(Clone)]
pub struct CourseProgressService {
    gateway: Arc<dyn CourseGateway>,
}

impl CourseProgressService {
    #[must_use]
    pub fn new(gateway: Arc<dyn CourseGateway>) -> Self {
        Self { gateway }
    }

    /// Enrolled courses, filtered and sorted by `query`.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Gateway` if the course list cannot be fetched.
    pub async fn list_courses(
        &self,
        query: &CourseQuery,
    ) -> Result<Vec<CourseListing>, CourseServiceError> {
        let courses = self.gateway.list_enrolled_courses().await?;
        let listed: Vec<CourseListing> = query.apply(&courses).into_iter().cloned().collect();
        debug!(
            fetched = courses.len(),
            listed = listed.len(),
            sort = ?query.sort,
            "course list filtered"
        );
        Ok(listed)
    }

    /// Chapter to continue `course_id` from, or `None` when every chapter is done.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Gateway` with `GatewayError::CourseNotFound`
    /// if the user is not enrolled in the course.
    pub async fn resume_chapter(
        &self,
        course_id: &CourseId,
    ) -> Result<Option<u32>, CourseServiceError> {
        let course = self.find(course_id).await?;
        Ok(course.resume_chapter())
    }

    /// Mark chapter `index` of `course_id` as completed.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::ChapterOutOfRange` for an index past the last chapter,
    /// or `CourseServiceError::Gateway` on lookup and transport failures.
    pub async fn complete_chapter(
        &self,
        course_id: &CourseId,
        index: u32,
    ) -> Result<Receipt, CourseServiceError> {
        let course = self.find(course_id).await?;
        let chapters = course.progress.chapters_count;
        if index >= chapters {
            return Err(CourseServiceError::ChapterOutOfRange {
                course_id: course_id.clone(),
                index,
                chapters,
            });
        }
        Ok(self.gateway.complete_chapter(course_id, index).await?)
    }

    /// Content of chapter `index` of `course_id`, ready to be read page by page.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::ChapterOutOfRange` when the course has no such chapter,
    /// or `CourseServiceError::Gateway` on lookup and transport failures.
    pub async fn open_chapter(
        &self,
        course_id: &CourseId,
        index: u32,
    ) -> Result<CourseChapter, CourseServiceError> {
        let mut chapters = self.gateway.fetch_course_chapters(course_id).await?;
        let count = chapters.len();
        let position = usize::try_from(index).unwrap_or(usize::MAX);
        if position >= count {
            return Err(CourseServiceError::ChapterOutOfRange {
                course_id: course_id.clone(),
                index,
                chapters: u32::try_from(count).unwrap_or(u32::MAX),
            });
        }
        let chapter = chapters.swap_remove(position);
        debug!(%course_id, index, pages = chapter.pages.len(), "chapter opened");
        Ok(chapter)
    }

    async fn find(&self, course_id: &CourseId) -> Result<CourseListing, CourseServiceError> {
        self.gateway
            .list_enrolled_courses()
            .await?
            .into_iter()
            .find(|c| &c.id == course_id)
            .ok_or_else(|| GatewayError::CourseNotFound(course_id.clone()).into())
    }
}
