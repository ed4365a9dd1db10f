//! 문서 파서
//!
//! - `fields` - 문항 하나에서 필드를 뽑는 추출기
//! - `delimited` - `===세트 시작===` 구분자 텍스트 문서
//! - `markdown` - `**라벨**` / `---` 마크다운 문서
//!
//! 두 파서 모두 문서 하나를 받아 그 문서만의 [`Dataset`] 을 만든다.
//! 여러 문서의 결과를 합치는 일은 `services::dataset_merger` 가 맡는다.

pub mod delimited;
pub mod fields;
pub mod markdown;

use crate::models::Dataset;

pub use delimited::parse_delimited;
pub use fields::{extract_delimited, extract_markdown, ExtractedUnit, Field, UnitOutcome};
pub use markdown::parse_markdown;

/// 문서 하나의 파싱 결과
#[derive(Debug, Default)]
pub struct ParseReport {
    /// 이 문서에서 만들어진 부분 데이터셋
    pub dataset: Dataset,
    /// 수록된 세트 수
    pub accepted: usize,
    /// 필수 필드 누락으로 제외된 문항 수
    pub rejected: usize,
    /// 과목/주제가 정해지기 전에 나와 버려진 세트 수
    pub orphaned: usize,
}

/// 진단 메시지에 붙일 문항 미리보기 (첫 번째 내용 줄)
pub(crate) fn unit_preview(text: &str) -> String {
    let first = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");
    crate::utils::logging::truncate_text(first, 40)
}

/// 누락 필드 목록을 "문제, 정답" 형태로 만든다
pub(crate) fn describe_missing(missing: &[Field]) -> String {
    missing
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}
