//! Course catalog model: formation -> course -> chapter -> section.
//!
//! A formation is the authored unit the admin dashboard manages. The tree
//! editing operations mirror what the structure editor needs: append a child
//! with an auto-numbered title, or remove one by position. Indices out of
//! range are no-ops so the editor never has to pre-validate a selection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of content a section holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Text,
    Image,
    Video,
}

/// A category a formation is filed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Leaf content unit of a chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default)]
    pub id: Option<u32>,
    pub title: String,
    pub content_kind: ContentKind,
    #[serde(default)]
    pub content: String,
}

/// A chapter groups sections inside a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(default)]
    pub id: Option<u32>,
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A course groups chapters inside a formation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub id: Option<u32>,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// The root authored unit of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formation {
    /// `None` until the formation has been saved.
    #[serde(default)]
    pub id: Option<u32>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub image: String,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Formation {
    /// A fresh draft, as the editor opens it before any save.
    pub fn draft(title: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            description: String::new(),
            level: "Beginner".to_string(),
            image: String::new(),
            updated_at: now,
            price: 0.0,
            published: false,
            category: None,
            courses: Vec::new(),
        }
    }

    /// Append a new course with an auto-numbered title; returns its index.
    pub fn add_course(&mut self) -> usize {
        self.courses.push(Course {
            id: None,
            title: format!("New Course {}", self.courses.len() + 1),
            summary: String::new(),
            chapters: Vec::new(),
        });
        self.courses.len() - 1
    }

    /// Append a new chapter under the course at `course_idx`.
    ///
    /// Returns the chapter index, or `None` if the course does not exist.
    pub fn add_chapter(&mut self, course_idx: usize) -> Option<usize> {
        let course = self.courses.get_mut(course_idx)?;
        course.chapters.push(Chapter {
            id: None,
            title: format!("New Chapter {}", course.chapters.len() + 1),
            sections: Vec::new(),
        });
        Some(course.chapters.len() - 1)
    }

    /// Append a new text section under the addressed chapter.
    pub fn add_section(&mut self, course_idx: usize, chapter_idx: usize) -> Option<usize> {
        let chapter = self.courses.get_mut(course_idx)?.chapters.get_mut(chapter_idx)?;
        chapter.sections.push(Section {
            id: None,
            title: format!("New Section {}", chapter.sections.len() + 1),
            content_kind: ContentKind::Text,
            content: String::new(),
        });
        Some(chapter.sections.len() - 1)
    }

    /// Remove and return the course at `course_idx`.
    pub fn remove_course(&mut self, course_idx: usize) -> Option<Course> {
        (course_idx < self.courses.len()).then(|| self.courses.remove(course_idx))
    }

    /// Remove and return the addressed chapter.
    pub fn remove_chapter(&mut self, course_idx: usize, chapter_idx: usize) -> Option<Chapter> {
        let course = self.courses.get_mut(course_idx)?;
        (chapter_idx < course.chapters.len()).then(|| course.chapters.remove(chapter_idx))
    }

    /// Remove and return the addressed section.
    pub fn remove_section(
        &mut self,
        course_idx: usize,
        chapter_idx: usize,
        section_idx: usize,
    ) -> Option<Section> {
        let chapter = self.courses.get_mut(course_idx)?.chapters.get_mut(chapter_idx)?;
        (section_idx < chapter.sections.len()).then(|| chapter.sections.remove(section_idx))
    }

    /// Name of the category, or a placeholder for unfiled formations.
    pub fn category_name(&self) -> String {
        self.category
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Uncategorized".to_string())
    }
}

/// Usage indicators for one formation, sourced outside the catalog itself.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormationKpis {
    pub enrolled_count: u32,
    pub average_rating: f64,
    /// Share of enrolled learners who finished, 0-100.
    pub completion_rate: u32,
    pub revenue: f64,
}

/// One row of the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormationSummary {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub category_name: String,
    pub price: f64,
    pub published: bool,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub kpis: FormationKpis,
}

impl FormationSummary {
    /// Build a dashboard row from a saved formation and its indicators.
    ///
    /// Unsaved formations have no id and no row; callers skip them.
    pub fn from_formation(formation: &Formation, kpis: FormationKpis) -> Option<Self> {
        Some(Self {
            id: formation.id?,
            title: formation.title.clone(),
            image: formation.image.clone(),
            category_name: formation.category_name(),
            price: formation.price,
            published: formation.published,
            updated_at: formation.updated_at,
            kpis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> Formation {
        Formation::draft("New Formation", Utc::now())
    }

    #[test]
    fn add_operations_auto_number_titles() {
        let mut f = draft();
        f.add_course();
        f.add_course();
        assert_eq!(f.courses[0].title, "New Course 1");
        assert_eq!(f.courses[1].title, "New Course 2");

        f.add_chapter(1);
        assert_eq!(f.courses[1].chapters[0].title, "New Chapter 1");

        f.add_section(1, 0);
        let section = &f.courses[1].chapters[0].sections[0];
        assert_eq!(section.title, "New Section 1");
        assert_eq!(section.content_kind, ContentKind::Text);
    }

    #[test]
    fn add_to_missing_parent_is_a_noop() {
        let mut f = draft();
        assert_eq!(f.add_chapter(0), None);
        f.add_course();
        assert_eq!(f.add_section(0, 3), None);
        assert!(f.courses[0].chapters.is_empty());
    }

    #[test]
    fn remove_operations_return_the_removed_node() {
        let mut f = draft();
        f.add_course();
        f.add_chapter(0);
        f.add_section(0, 0);

        let section = f.remove_section(0, 0, 0).unwrap();
        assert_eq!(section.title, "New Section 1");
        assert!(f.remove_section(0, 0, 0).is_none());

        let chapter = f.remove_chapter(0, 0).unwrap();
        assert_eq!(chapter.title, "New Chapter 1");

        let course = f.remove_course(0).unwrap();
        assert_eq!(course.title, "New Course 1");
        assert!(f.courses.is_empty());
    }

    #[test]
    fn summary_requires_a_saved_formation() {
        let mut f = draft();
        assert!(FormationSummary::from_formation(&f, FormationKpis::default()).is_none());

        f.id = Some(7);
        f.category = Some(Category {
            id: Some(1),
            name: "Web".into(),
            description: String::new(),
        });
        let row = FormationSummary::from_formation(&f, FormationKpis::default()).unwrap();
        assert_eq!(row.id, 7);
        assert_eq!(row.category_name, "Web");

        f.category = None;
        let row = FormationSummary::from_formation(&f, FormationKpis::default()).unwrap();
        assert_eq!(row.category_name, "Uncategorized");
    }
}
