//! 문제은행 데이터셋 모델
//!
//! 과목 → 주제 → 세트 구조로 이루어지며, JSON 출력 형태와 1:1 로 대응한다.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 별 표시 문자
pub const STAR: char = '★';

/// 난이도 (하 / 중 / 상)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "하")]
    Low,
    #[serde(rename = "중")]
    Medium,
    #[serde(rename = "상")]
    High,
}

impl Difficulty {
    /// 표준 표기
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Low => "하",
            Difficulty::Medium => "중",
            Difficulty::High => "상",
        }
    }

    /// 별 개수를 난이도로 변환
    ///
    /// 정확히 1개는 하, 정확히 2개는 중, 그 밖의 개수(0개, 3개 이상)는 모두 상.
    pub fn from_star_count(count: usize) -> Self {
        match count {
            1 => Difficulty::Low,
            2 => Difficulty::Medium,
            _ => Difficulty::High,
        }
    }

    /// 텍스트 안의 별 개수로 난이도 결정
    pub fn from_stars(text: &str) -> Self {
        Self::from_star_count(text.chars().filter(|&c| c == STAR).count())
    }

    /// 표준 표기("하"/"중"/"상")면 그대로, 아니면 별 개수 규칙으로 정규화
    pub fn normalize(text: &str) -> Self {
        match text.trim() {
            "하" => Difficulty::Low,
            "중" => Difficulty::Medium,
            "상" => Difficulty::High,
            other => Self::from_stars(other),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 예시 문제 본문
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub difficulty: Difficulty,
    pub question: String,
    /// 보기 (원문 순서 유지, 번호는 제거된 상태)
    pub options: Vec<String>,
    pub answer: String,
    pub explanation: String,
}

/// 세트: 참고 내용 + 예시 문제 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    #[serde(default)]
    pub reference: String,
    pub example: Example,
}

impl QuestionSet {
    pub fn new(reference: impl Into<String>, example: Example) -> Self {
        Self {
            reference: reference.into(),
            example,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(default)]
    pub sets: Vec<QuestionSet>,
}

/// 과목 항목 (이름 + 주제 목록)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectEntry {
    pub name: String,
    #[serde(default)]
    pub topics: BTreeMap<String, Topic>,
}

impl SubjectEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            topics: BTreeMap::new(),
        }
    }

    /// 주제를 찾고, 없으면 빈 주제를 만든다
    pub fn topic_mut(&mut self, topic: &str) -> &mut Topic {
        self.topics.entry(topic.to_string()).or_default()
    }
}

/// 전체 데이터셋: 과목 ID → 과목 항목
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    subjects: BTreeMap<String, SubjectEntry>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn subject(&self, id: &str) -> Option<&SubjectEntry> {
        self.subjects.get(id)
    }

    pub fn subjects(&self) -> impl Iterator<Item = (&String, &SubjectEntry)> {
        self.subjects.iter()
    }

    /// 과목을 찾고, 없으면 주어진 이름으로 만든다 (이미 있으면 이름은 유지)
    pub fn subject_mut(&mut self, id: &str, name: &str) -> &mut SubjectEntry {
        self.subjects
            .entry(id.to_string())
            .or_insert_with(|| SubjectEntry::new(name))
    }

    /// 과목 항목을 통째로 꺼낸다 (병합용)
    pub(crate) fn into_subjects(self) -> BTreeMap<String, SubjectEntry> {
        self.subjects
    }

    pub(crate) fn subjects_mut(&mut self) -> &mut BTreeMap<String, SubjectEntry> {
        &mut self.subjects
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    pub fn topic_count(&self) -> usize {
        self.subjects.values().map(|s| s.topics.len()).sum()
    }

    pub fn set_count(&self) -> usize {
        self.subjects
            .values()
            .flat_map(|s| s.topics.values())
            .map(|t| t.sets.len())
            .sum()
    }
}
