//! Canonical course graph types
//!
//! Each struct encodes one layer of the instructional design stack. The
//! importer fills in keys, titles, orders and associations; the remaining
//! optional fields exist for downstream generators and stay at their
//! defaults after an import.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Title used when no course name appears anywhere in the data
pub const UNTITLED_COURSE: &str = "Untitled Course";

/// Default version stamped on freshly imported courses
pub const DEFAULT_COURSE_VERSION: &str = "0.1";

/// Observable behavior that demonstrates mastery of a learning outcome.
///
/// Performance criteria are deduplicated course-wide and shared between
/// every lesson and CLO that references them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceCriteria {
    /// Slug key (`pc-...`)
    pub key: String,

    /// First text seen for this key
    pub description: String,

    /// Expected proficiency level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<String>,

    /// How the criteria is assessed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_method: Option<String>,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PerformanceCriteria {
    /// Create a new performance criteria
    #[must_use]
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
            proficiency: None,
            assessment_method: None,
            notes: None,
        }
    }
}

/// Shared handle to a course-wide performance criteria
pub type SharedCriteria = Arc<PerformanceCriteria>;

/// A cohesive instructional chunk aligned to one or more CLOs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    /// Slug key (`lesson-...`); not unique across subtopics
    pub key: String,

    /// Lesson title as first seen
    pub title: String,

    /// Lesson description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Planned duration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,

    /// Delivery modality
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modality: Option<String>,

    /// Lesson-level objectives
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub objectives: Vec<String>,

    /// Keys of the CLOs this lesson supports, in first-seen order
    #[serde(default)]
    pub associated_clos: Vec<String>,

    /// Criteria demonstrated in this lesson, in first-seen order
    #[serde(default)]
    pub performance_criteria: Vec<SharedCriteria>,

    /// Supporting resources
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
}

impl Lesson {
    /// Create a new lesson without associations
    #[must_use]
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: None,
            duration_minutes: None,
            modality: None,
            objectives: Vec::new(),
            associated_clos: Vec::new(),
            performance_criteria: Vec::new(),
            resources: Vec::new(),
        }
    }
}

/// Secondary grouping underneath a topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtopic {
    /// Slug key (`subtopic-...`)
    pub key: String,

    /// Subtopic title as first seen
    pub title: String,

    /// Subtopic description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// 1-based position within the parent topic
    pub order: u32,

    /// Keys of the CLOs touching this subtopic
    #[serde(default)]
    pub associated_clos: Vec<String>,

    /// Lessons in first-seen order
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl Subtopic {
    /// Create a new subtopic without children
    #[must_use]
    pub fn new(key: impl Into<String>, title: impl Into<String>, order: u32) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: None,
            order,
            associated_clos: Vec::new(),
            lessons: Vec::new(),
        }
    }
}

/// Primary curricular pillar that groups subtopics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// Slug key (`topic-...`)
    pub key: String,

    /// Topic title as first seen
    pub title: String,

    /// Topic description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// 1-based position within the course
    pub order: u32,

    /// Keys of the CLOs touching this topic
    #[serde(default)]
    pub associated_clos: Vec<String>,

    /// Subtopics in first-seen order
    #[serde(default)]
    pub subtopics: Vec<Subtopic>,
}

impl Topic {
    /// Create a new topic without children
    #[must_use]
    pub fn new(key: impl Into<String>, title: impl Into<String>, order: u32) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: None,
            order,
            associated_clos: Vec::new(),
            subtopics: Vec::new(),
        }
    }

    /// Iterate over every lesson under this topic
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.subtopics.iter().flat_map(|s| s.lessons.iter())
    }
}

/// Course learning outcome tracked across topics and lessons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clo {
    /// Slug key (`clo-...`)
    pub key: String,

    /// First text seen for this key
    pub description: String,

    /// Bloom's taxonomy level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bloom_level: Option<String>,

    /// Relative priority
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// Planned assessment methods
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assessment_methods: Vec<String>,

    /// Criteria aggregated from every lesson aligned to this CLO
    #[serde(default)]
    pub performance_criteria: Vec<SharedCriteria>,
}

impl Clo {
    /// Create a new CLO without criteria
    #[must_use]
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
            bloom_level: None,
            priority: None,
            assessment_methods: Vec::new(),
            performance_criteria: Vec::new(),
        }
    }
}

/// Top-level aggregate that binds the imported instructional design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseMetadata {
    /// Slug key (`course-...`) derived from the title
    pub course_id: String,

    /// Course title
    pub title: String,

    /// Course description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Design version
    #[serde(default = "default_version")]
    pub version: String,

    /// Total contact hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<f64>,

    /// Delivery mode (in-person, online, hybrid, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_mode: Option<String>,

    /// Free-form tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Learning outcomes in first-seen order
    #[serde(default)]
    pub clos: Vec<Clo>,

    /// Topics in first-seen order
    #[serde(default)]
    pub topics: Vec<Topic>,
}

fn default_version() -> String {
    DEFAULT_COURSE_VERSION.to_string()
}

impl CourseMetadata {
    /// Create an empty course
    #[must_use]
    pub fn new(course_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            title: title.into(),
            description: None,
            version: default_version(),
            duration_hours: None,
            delivery_mode: None,
            tags: Vec::new(),
            clos: Vec::new(),
            topics: Vec::new(),
        }
    }

    /// Look up a CLO by key
    #[must_use]
    pub fn clo(&self, key: &str) -> Option<&Clo> {
        self.clos.iter().find(|clo| clo.key == key)
    }

    /// Look up a topic by key
    #[must_use]
    pub fn topic(&self, key: &str) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.key == key)
    }

    /// Total number of lessons across all topics
    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.topics.iter().map(|t| t.lessons().count()).sum()
    }

    /// Distinct performance criteria in first-seen lesson order
    #[must_use]
    pub fn performance_criteria(&self) -> Vec<SharedCriteria> {
        let mut seen: Vec<SharedCriteria> = Vec::new();
        for lesson in self.topics.iter().flat_map(Topic::lessons) {
            for pc in &lesson.performance_criteria {
                if !seen.iter().any(|existing| existing.key == pc.key) {
                    seen.push(Arc::clone(pc));
                }
            }
        }
        seen
    }
}
