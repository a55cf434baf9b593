//! Incremental construction of the course graph
//!
//! The builder keeps one arena per entity level, keyed by slug identity and
//! kept in first-seen order. Parents refer to their children by arena index
//! while rows are ingested; the nested [`CourseMetadata`] snapshot is only
//! assembled in [`CourseBuilder::build`]. Performance criteria are the one
//! shared entity: a single `Arc` per key is handed to every lesson and CLO
//! that references it.

use indexmap::IndexMap;
use indexmap::map::Entry;
use scalar_core::error::{CourseError, Result};
use scalar_core::slug::EntityKind;
use scalar_core::types::{
    Clo, CourseMetadata, Lesson, PerformanceCriteria, SharedCriteria, Subtopic, Topic,
    UNTITLED_COURSE,
};
use std::hash::Hash;
use std::sync::Arc;
use tracing::{debug, info};

use super::types::ScalarRow;

/// Subtopic identity: owning topic slot plus subtopic key
type SubtopicId = (usize, String);

/// Lesson identity: owning subtopic slot, lesson key, and verbatim title
type LessonId = (usize, String, String);

/// Arena entry for an entity that owns ordered children
#[derive(Debug)]
struct Node<T> {
    entity: T,
    children: Vec<usize>,
    next_child_order: u32,
}

impl<T> Node<T> {
    fn new(entity: T) -> Self {
        Self {
            entity,
            children: Vec::new(),
            next_child_order: 1,
        }
    }
}

/// Incrementally constructs the in-memory course graph from normalized rows.
///
/// Each builder covers exactly one parse. [`build`](Self::build) consumes it,
/// so rows can no longer be ingested once the snapshot exists.
#[derive(Debug)]
pub struct CourseBuilder {
    course_title: Option<String>,
    clos: IndexMap<String, Clo>,
    topics: IndexMap<String, Node<Topic>>,
    subtopics: IndexMap<SubtopicId, Node<Subtopic>>,
    lessons: IndexMap<LessonId, Lesson>,
    performance_criteria: IndexMap<String, SharedCriteria>,
    next_topic_order: u32,
    rows_ingested: usize,
}

impl CourseBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            course_title: None,
            clos: IndexMap::new(),
            topics: IndexMap::new(),
            subtopics: IndexMap::new(),
            lessons: IndexMap::new(),
            performance_criteria: IndexMap::new(),
            next_topic_order: 1,
            rows_ingested: 0,
        }
    }

    /// Number of rows ingested so far
    #[must_use]
    pub fn rows_ingested(&self) -> usize {
        self.rows_ingested
    }

    /// Fold one normalized row into the graph.
    ///
    /// A rejected row leaves the builder unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::IncompleteRowError` if the row lacks a CLO,
    /// topic, subtopic, or lesson title. Performance criteria is optional.
    pub fn ingest(&mut self, row: &ScalarRow) -> Result<()> {
        let (Some(clo_text), Some(topic_text), Some(subtopic_text), Some(lesson_title)) = (
            row.clo.as_deref(),
            row.topic.as_deref(),
            row.subtopic.as_deref(),
            row.lesson_title.as_deref(),
        ) else {
            return Err(CourseError::incomplete_row(row.to_string()));
        };

        if self.course_title.is_none() {
            self.course_title.clone_from(&row.course_name);
        }

        let clo_idx = self.get_or_create_clo(clo_text);
        let clo_key = self.clos[clo_idx].key.clone();

        let topic_idx = self.get_or_create_topic(topic_text);
        append_unique(&mut self.topics[topic_idx].entity.associated_clos, &clo_key);

        let subtopic_idx = self.get_or_create_subtopic(topic_idx, subtopic_text);
        append_unique(
            &mut self.subtopics[subtopic_idx].entity.associated_clos,
            &clo_key,
        );

        let lesson_idx = self.get_or_create_lesson(subtopic_idx, lesson_title);
        append_unique(&mut self.lessons[lesson_idx].associated_clos, &clo_key);

        if let Some(pc_text) = row.performance_criteria.as_deref() {
            let pc = self.get_or_create_performance_criteria(pc_text);
            attach_criteria(&mut self.lessons[lesson_idx].performance_criteria, &pc);
            attach_criteria(&mut self.clos[clo_idx].performance_criteria, &pc);
        }

        self.rows_ingested += 1;
        Ok(())
    }

    /// Produce the immutable course snapshot.
    ///
    /// CLOs and topics come out in first-seen order. The course title falls
    /// back to [`UNTITLED_COURSE`] when no row named the course.
    #[must_use]
    pub fn build(self) -> CourseMetadata {
        let title = self
            .course_title
            .unwrap_or_else(|| UNTITLED_COURSE.to_string());
        let course_id = EntityKind::Course.key(&title);

        let mut lessons: Vec<Option<Lesson>> = self.lessons.into_values().map(Some).collect();
        let mut subtopics: Vec<Option<Subtopic>> = self
            .subtopics
            .into_values()
            .map(|node| {
                let mut subtopic = node.entity;
                subtopic.lessons = take_children(&mut lessons, &node.children);
                Some(subtopic)
            })
            .collect();
        let topics: Vec<Topic> = self
            .topics
            .into_values()
            .map(|node| {
                let mut topic = node.entity;
                topic.subtopics = take_children(&mut subtopics, &node.children);
                topic
            })
            .collect();

        let mut course = CourseMetadata::new(course_id, title);
        course.clos = self.clos.into_values().collect();
        course.topics = topics;

        info!(
            "Built course '{}' from {} rows: {} CLOs, {} topics, {} lessons, {} performance criteria",
            course.course_id,
            self.rows_ingested,
            course.clos.len(),
            course.topics.len(),
            course.lesson_count(),
            self.performance_criteria.len()
        );

        course
    }

    fn get_or_create_clo(&mut self, text: &str) -> usize {
        let (idx, created) = set_on_create(&mut self.clos, EntityKind::Clo.key(text), |key| {
            Clo::new(key.clone(), text)
        });
        if created {
            debug!("Created {} '{}'", EntityKind::Clo, self.clos[idx].key);
        }
        idx
    }

    fn get_or_create_topic(&mut self, text: &str) -> usize {
        let order = self.next_topic_order;
        let (idx, created) = set_on_create(&mut self.topics, EntityKind::Topic.key(text), |key| {
            Node::new(Topic::new(key.clone(), text, order))
        });
        if created {
            self.next_topic_order += 1;
            debug!(
                "Created {} '{}' (order {order})",
                EntityKind::Topic,
                self.topics[idx].entity.key
            );
        }
        idx
    }

    fn get_or_create_subtopic(&mut self, topic_idx: usize, text: &str) -> usize {
        let key = EntityKind::Subtopic.key(text);
        let order = self.topics[topic_idx].next_child_order;
        let (idx, created) = set_on_create(&mut self.subtopics, (topic_idx, key), |(_, key)| {
            Node::new(Subtopic::new(key.clone(), text, order))
        });
        if created {
            let topic = &mut self.topics[topic_idx];
            topic.children.push(idx);
            topic.next_child_order += 1;
            debug!(
                "Created {} '{}' under '{}' (order {order})",
                EntityKind::Subtopic,
                self.subtopics[idx].entity.key, topic.entity.key
            );
        }
        idx
    }

    fn get_or_create_lesson(&mut self, subtopic_idx: usize, title: &str) -> usize {
        let key = EntityKind::Lesson.key(title);
        let (idx, created) = set_on_create(
            &mut self.lessons,
            (subtopic_idx, key, title.to_string()),
            |(_, key, title)| Lesson::new(key.clone(), title.clone()),
        );
        if created {
            let subtopic = &mut self.subtopics[subtopic_idx];
            subtopic.children.push(idx);
            debug!(
                "Created {} '{}' under '{}'",
                EntityKind::Lesson,
                self.lessons[idx].key, subtopic.entity.key
            );
        }
        idx
    }

    fn get_or_create_performance_criteria(&mut self, text: &str) -> SharedCriteria {
        let (idx, created) = set_on_create(
            &mut self.performance_criteria,
            EntityKind::PerformanceCriteria.key(text),
            |key| Arc::new(PerformanceCriteria::new(key.clone(), text)),
        );
        let pc = &self.performance_criteria[idx];
        if created {
            debug!("Created {} '{}'", EntityKind::PerformanceCriteria, pc.key);
        }
        Arc::clone(pc)
    }
}

impl Default for CourseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Set-on-create merge policy.
///
/// The first row that mentions a key creates the entity; later rows reuse
/// it without touching its attributes. Returns the arena slot and whether
/// the entity was created by this call.
fn set_on_create<K, V>(
    arena: &mut IndexMap<K, V>,
    key: K,
    create: impl FnOnce(&K) -> V,
) -> (usize, bool)
where
    K: Hash + Eq,
{
    match arena.entry(key) {
        Entry::Occupied(entry) => (entry.index(), false),
        Entry::Vacant(entry) => {
            let idx = entry.index();
            let value = create(entry.key());
            entry.insert(value);
            (idx, true)
        }
    }
}

/// Append a key unless already present, preserving insertion order
fn append_unique(keys: &mut Vec<String>, key: &str) {
    if !keys.iter().any(|existing| existing == key) {
        keys.push(key.to_string());
    }
}

/// Attach a shared criteria unless one with the same key is already attached
fn attach_criteria(criteria: &mut Vec<SharedCriteria>, pc: &SharedCriteria) {
    if !criteria.iter().any(|existing| existing.key == pc.key) {
        criteria.push(Arc::clone(pc));
    }
}

/// Move children out of a flattened arena; every child has exactly one parent
fn take_children<T>(arena: &mut [Option<T>], indices: &[usize]) -> Vec<T> {
    indices
        .iter()
        .filter_map(|&idx| arena.get_mut(idx).and_then(Option::take))
        .collect()
}
