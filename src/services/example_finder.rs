//! 예시 문제 조회 서비스
//!
//! 저장된 데이터셋에서 과목/주제/난이도에 맞는 예시 문제를 찾는다.
//! 문제 생성 서버가 프롬프트에 넣을 예시를 고를 때 쓰는 조회와 같은 규칙이다.

use crate::models::{Dataset, Difficulty, Example};
use serde::Serialize;

/// 과목, 주제, 난이도가 일치하는 예시 문제를 저장 순서대로 돌려준다
///
/// 과목이나 주제가 없으면 빈 목록이다.
pub fn find_examples<'a>(
    dataset: &'a Dataset,
    subject_id: &str,
    topic: &str,
    difficulty: Difficulty,
) -> Vec<&'a Example> {
    dataset
        .subject(subject_id)
        .and_then(|subject| subject.topics.get(topic))
        .map(|topic| {
            topic
                .sets
                .iter()
                .map(|set| &set.example)
                .filter(|example| example.difficulty == difficulty)
                .collect()
        })
        .unwrap_or_default()
}

/// 과목별 주제 목록 요약
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectSummary {
    pub id: String,
    pub name: String,
    pub topics: Vec<String>,
    pub set_count: usize,
}

/// 과목 ID 순서로 주제 목록을 정리한다
pub fn topic_catalog(dataset: &Dataset) -> Vec<SubjectSummary> {
    dataset
        .subjects()
        .map(|(id, subject)| SubjectSummary {
            id: id.clone(),
            name: subject.name.clone(),
            topics: subject.topics.keys().cloned().collect(),
            set_count: subject.topics.values().map(|t| t.sets.len()).sum(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionSet;

    fn example(question: &str, difficulty: Difficulty) -> Example {
        Example {
            difficulty,
            question: question.to_string(),
            options: vec!["가".to_string()],
            answer: "1".to_string(),
            explanation: "설명".to_string(),
        }
    }

    fn dataset() -> Dataset {
        let mut dataset = Dataset::new();
        let topic = dataset.subject_mut("3", "데이터베이스 구축").topic_mut("SQL 응용");
        for (q, d) in [
            ("q1", Difficulty::Low),
            ("q2", Difficulty::High),
            ("q3", Difficulty::Low),
        ] {
            topic.sets.push(QuestionSet::new("", example(q, d)));
        }
        dataset.subject_mut("3", "").topic_mut("정규화");
        dataset
    }

    #[test]
    fn test_find_examples_filters_by_difficulty_in_order() {
        let dataset = dataset();
        let found: Vec<&str> = find_examples(&dataset, "3", "SQL 응용", Difficulty::Low)
            .into_iter()
            .map(|e| e.question.as_str())
            .collect();
        assert_eq!(found, vec!["q1", "q3"]);
        assert!(find_examples(&dataset, "3", "SQL 응용", Difficulty::Medium).is_empty());
    }

    #[test]
    fn test_find_examples_unknown_keys_are_empty() {
        let dataset = dataset();
        assert!(find_examples(&dataset, "9", "SQL 응용", Difficulty::Low).is_empty());
        assert!(find_examples(&dataset, "3", "없는 주제", Difficulty::Low).is_empty());
    }

    #[test]
    fn test_topic_catalog() {
        let catalog = topic_catalog(&dataset());
        assert_eq!(
            catalog,
            vec![SubjectSummary {
                id: "3".to_string(),
                name: "데이터베이스 구축".to_string(),
                topics: vec!["SQL 응용".to_string(), "정규화".to_string()],
                set_count: 3,
            }]
        );
    }
}
