//! 마크다운 문서 파서
//!
//! 문서 하나가 주제 하나이고, 문항은 `---` 줄로 나뉜다.
//! 과목은 문서가 들어 있는 `N과목` 디렉터리로, 주제는 파일 이름으로 정해진다.

use super::fields::{extract_markdown, UnitOutcome};
use super::{describe_missing, unit_preview, ParseReport};
use crate::models::{QuestionSet, Subject};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// 문항 구분선 (`---` 만 있는 줄)
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*---[ \t]*\r?$").expect("valid separator regex"));

/// 마크다운 문서 전체를 파싱한다
///
/// 필수 필드 6개가 모두 있는 문항만 받아들이고, 나머지는 누락 필드를 남기고 건너뛴다.
/// 받아들인 문항이 하나도 없으면 빈 데이터셋을 돌려준다.
pub fn parse_markdown(text: &str, subject: Subject, topic: &str, source: &str) -> ParseReport {
    let mut report = ParseReport::default();
    let mut sets = Vec::new();

    let blocks = SEPARATOR
        .split(text)
        .filter(|block| !block.trim().is_empty());

    for (index, block) in blocks.enumerate() {
        match extract_markdown(block) {
            UnitOutcome::Accepted(unit) => {
                debug!(
                    "[{}] 문항 {} 수록 (카테고리: {})",
                    source,
                    index + 1,
                    unit.category.as_deref().unwrap_or("")
                );
                sets.push(QuestionSet::new(String::new(), unit.example));
            }
            UnitOutcome::Rejected { missing } => {
                warn!(
                    "[{}] ⚠️ 문항 {} 제외 - 누락 필드: {} ({})",
                    source,
                    index + 1,
                    describe_missing(&missing),
                    unit_preview(block)
                );
                report.rejected += 1;
            }
        }
    }

    report.accepted = sets.len();
    if !sets.is_empty() {
        report
            .dataset
            .subject_mut(&subject.id(), subject.name())
            .topic_mut(topic)
            .sets = sets;
    }

    report
}
