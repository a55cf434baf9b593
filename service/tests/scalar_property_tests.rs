//! Property-based tests for the in-memory import pipeline

use proptest::prelude::*;
use scalar_importer::scalar::{CellValue, SheetGrid, parse_grid};
use std::collections::HashSet;

const HEADERS: [&str; 6] = [
    "Course Name",
    "CLO",
    "Topic",
    "Subtopic",
    "Lesson Title",
    "Performance Criteria",
];

/// A small vocabulary so rows collide often
fn row_strategy() -> impl Strategy<Value = Vec<String>> {
    (
        0..3usize,
        0..3usize,
        0..3usize,
        0..4usize,
        prop::option::of(0..3usize),
    )
        .prop_map(|(clo, topic, subtopic, lesson, pc)| {
            vec![
                "Course".to_string(),
                format!("CLO {clo}"),
                format!("Topic {topic}"),
                format!("Subtopic {subtopic}"),
                format!("Lesson {lesson}"),
                pc.map(|p| format!("PC {p}")).unwrap_or_default(),
            ]
        })
}

fn grid(rows: &[Vec<String>]) -> SheetGrid {
    SheetGrid::with_header(
        &HEADERS,
        rows.iter()
            .map(|row| row.iter().map(|cell| CellValue::from(cell.as_str())).collect())
            .collect(),
    )
}

proptest! {
    #[test]
    fn prop_import_is_deterministic(rows in prop::collection::vec(row_strategy(), 1..40)) {
        let first = parse_grid(&grid(&rows)).unwrap();
        let second = parse_grid(&grid(&rows)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_repeated_rows_are_idempotent(rows in prop::collection::vec(row_strategy(), 1..20)) {
        let once = parse_grid(&grid(&rows)).unwrap();

        let mut doubled = rows.clone();
        doubled.extend(rows.iter().cloned());
        let twice = parse_grid(&grid(&doubled)).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_orders_are_dense(rows in prop::collection::vec(row_strategy(), 1..40)) {
        let course = parse_grid(&grid(&rows)).unwrap();

        for (idx, topic) in course.topics.iter().enumerate() {
            prop_assert_eq!(topic.order as usize, idx + 1);
            for (sub_idx, subtopic) in topic.subtopics.iter().enumerate() {
                prop_assert_eq!(subtopic.order as usize, sub_idx + 1);
            }
        }
    }

    #[test]
    fn prop_no_duplicate_references(rows in prop::collection::vec(row_strategy(), 1..40)) {
        let course = parse_grid(&grid(&rows)).unwrap();

        for clo in &course.clos {
            let keys: HashSet<&str> = clo.performance_criteria.iter().map(|pc| pc.key.as_str()).collect();
            prop_assert_eq!(keys.len(), clo.performance_criteria.len());
        }
        for topic in &course.topics {
            let keys: HashSet<&String> = topic.associated_clos.iter().collect();
            prop_assert_eq!(keys.len(), topic.associated_clos.len());
            for lesson in topic.lessons() {
                let clos: HashSet<&String> = lesson.associated_clos.iter().collect();
                prop_assert_eq!(clos.len(), lesson.associated_clos.len());
                let pcs: HashSet<&str> = lesson.performance_criteria.iter().map(|pc| pc.key.as_str()).collect();
                prop_assert_eq!(pcs.len(), lesson.performance_criteria.len());
            }
        }
    }

    #[test]
    fn prop_every_row_lands_in_a_lesson(rows in prop::collection::vec(row_strategy(), 1..40)) {
        let course = parse_grid(&grid(&rows)).unwrap();

        for row in &rows {
            let topic = course
                .topics
                .iter()
                .find(|t| t.title == row[2])
                .expect("topic exists");
            let subtopic = topic
                .subtopics
                .iter()
                .find(|s| s.title == row[3])
                .expect("subtopic exists");
            let lesson = subtopic
                .lessons
                .iter()
                .find(|l| l.title == row[4])
                .expect("lesson exists");
            let clo_key = format!("clo-{}", row[1].to_lowercase().replace(' ', "-"));
            prop_assert!(lesson.associated_clos.contains(&clo_key));
        }
    }
}
