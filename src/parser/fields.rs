//! 필드 추출기
//!
//! 문항 하나 분량의 원문에서 난이도, 카테고리, 문제, 보기, 정답, 해설을 뽑아낸다.
//! 결과는 항상 [`UnitOutcome`] 으로 돌려주며, 필수 필드가 빠진 문항은
//! 빠진 필드 목록과 함께 `Rejected` 가 된다.

use crate::models::dataset::{Difficulty, Example};
use phf::phf_map;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// 추출 대상 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Difficulty,
    Category,
    Question,
    Options,
    Answer,
    Explanation,
}

impl Field {
    /// 원문에서 쓰는 라벨 이름
    pub fn label(self) -> &'static str {
        match self {
            Field::Difficulty => "난이도",
            Field::Category => "카테고리",
            Field::Question => "문제",
            Field::Options => "보기",
            Field::Answer => "정답",
            Field::Explanation => "해설",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 텍스트 형식에서 반드시 있어야 하는 필드
pub const DELIMITED_REQUIRED: &[Field] = &[
    Field::Question,
    Field::Options,
    Field::Answer,
    Field::Explanation,
];

/// 마크다운 형식에서 반드시 있어야 하는 필드
pub const MARKDOWN_REQUIRED: &[Field] = &[
    Field::Difficulty,
    Field::Category,
    Field::Question,
    Field::Options,
    Field::Answer,
    Field::Explanation,
];

/// 추출에 성공한 문항
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedUnit {
    pub reference: String,
    pub example: Example,
    /// 마크다운 형식의 카테고리 (출력에는 포함되지 않음)
    pub category: Option<String>,
}

/// 문항 하나의 추출 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitOutcome {
    Accepted(ExtractedUnit),
    Rejected { missing: Vec<Field> },
}

/// 추출 중간 결과 (모두 원문 문자열)
#[derive(Debug, Default)]
struct RawFields {
    difficulty: String,
    category: String,
    question: String,
    options: Vec<String>,
    answer: String,
    explanation: String,
}

impl RawFields {
    fn is_present(&self, field: Field) -> bool {
        match field {
            Field::Difficulty => !self.difficulty.is_empty(),
            Field::Category => !self.category.is_empty(),
            Field::Question => !self.question.is_empty(),
            Field::Options => !self.options.is_empty(),
            Field::Answer => !self.answer.is_empty(),
            Field::Explanation => !self.explanation.is_empty(),
        }
    }

    fn into_outcome(
        self,
        reference: String,
        required: &[Field],
        difficulty: fn(&str) -> Difficulty,
    ) -> UnitOutcome {
        let missing: Vec<Field> = required
            .iter()
            .copied()
            .filter(|&f| !self.is_present(f))
            .collect();
        if !missing.is_empty() {
            return UnitOutcome::Rejected { missing };
        }

        UnitOutcome::Accepted(ExtractedUnit {
            reference,
            example: Example {
                difficulty: difficulty(&self.difficulty),
                question: self.question,
                options: self.options,
                answer: self.answer,
                explanation: self.explanation,
            },
            category: (!self.category.is_empty()).then_some(self.category),
        })
    }
}

// ========== 텍스트(구분자) 형식 ==========

const REFERENCE_MARKER: &str = "참고내용:";
const EXAMPLE_MARKER: &str = "예시문제:";
const DIFFICULTY_MARKER: &str = "난이도:";
const QUESTION_MARKER: &str = "문제:";
const ANSWER_MARKER: &str = "정답:";
const EXPLANATION_MARKER: &str = "해설:";
const OPTION_GLYPHS: [char; 4] = ['①', '②', '③', '④'];

/// 세트 블록 안에서의 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetMode {
    Neutral,
    Reference,
    Example,
}

/// 세트 블록(시작/끝 표시 사이의 줄들)에서 필드를 추출한다
///
/// 필드 표시는 모드와 상관없이 인식한다. 표시가 없는 줄은 참고내용 모드에서는
/// 참고 내용에, 예시문제 모드에서는 직전의 문제/해설 필드에 이어 붙는다.
pub fn extract_delimited<S: AsRef<str>>(lines: &[S]) -> UnitOutcome {
    let mut mode = SetMode::Neutral;
    let mut open: Option<Field> = None;
    let mut reference: Vec<&str> = Vec::new();
    let mut question: Vec<&str> = Vec::new();
    let mut explanation: Vec<&str> = Vec::new();
    let mut raw = RawFields::default();

    for line in lines {
        let line = line.as_ref().trim();

        if let Some(rest) = line.strip_prefix(REFERENCE_MARKER) {
            mode = SetMode::Reference;
            open = None;
            if !rest.trim().is_empty() {
                reference.push(rest.trim());
            }
        } else if line.starts_with(EXAMPLE_MARKER) {
            mode = SetMode::Example;
            open = None;
        } else if let Some(rest) = line.strip_prefix(DIFFICULTY_MARKER) {
            raw.difficulty = rest.trim().to_string();
            open = None;
        } else if let Some(rest) = line.strip_prefix(QUESTION_MARKER) {
            question = vec![rest.trim()];
            open = Some(Field::Question);
        } else if let Some(rest) = line.strip_prefix(OPTION_GLYPHS) {
            raw.options.push(rest.trim().to_string());
            open = None;
        } else if let Some(rest) = line.strip_prefix(ANSWER_MARKER) {
            raw.answer = rest.trim().to_string();
            open = None;
        } else if let Some(rest) = line.strip_prefix(EXPLANATION_MARKER) {
            explanation = vec![rest.trim()];
            open = Some(Field::Explanation);
        } else {
            match (mode, open) {
                (SetMode::Reference, _) => reference.push(line),
                (SetMode::Example, Some(Field::Question)) => question.push(line),
                (SetMode::Example, Some(Field::Explanation)) => explanation.push(line),
                _ => {}
            }
        }
    }

    raw.question = join_trimmed(&question);
    raw.explanation = join_trimmed(&explanation);
    raw.into_outcome(
        join_trimmed(&reference),
        DELIMITED_REQUIRED,
        Difficulty::normalize,
    )
}

/// 여러 줄을 이어 붙이고 앞뒤 공백(빈 줄 포함)을 제거한다
fn join_trimmed(lines: &[&str]) -> String {
    lines.join("\n").trim().to_string()
}

// ========== 마크다운 형식 ==========

/// 굵은 글씨 라벨 → 필드
static LABELS: phf::Map<&'static str, Field> = phf_map! {
    "난이도" => Field::Difficulty,
    "카테고리" => Field::Category,
    "문제" => Field::Question,
    "보기" => Field::Options,
    "정답" => Field::Answer,
    "해설" => Field::Explanation,
};

/// `**라벨**` 또는 `**라벨**:` 형태의 굵은 글씨
static BOLD_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*\n]+?)\*\*[ \t]*:?").expect("valid label regex"));

/// `1. 보기 내용` 형태의 번호 목록 줄
static NUMBERED_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s*(.*)$").expect("valid option regex"));

/// 블록 안의 라벨 위치를 찾아 필드별 본문 구간을 나눈다
///
/// 각 필드의 본문은 자기 라벨 끝에서 다음으로 인식된 라벨 시작까지다.
/// 같은 라벨이 여러 번 나오면 첫 번째 것이 필드가 되고, 뒤의 것은 앞 구간의
/// 끝 경계로만 쓰인다. 알 수 없는 굵은 글씨는 경계가 아니다.
pub fn locate_sections(block: &str) -> BTreeMap<Field, &str> {
    let marks: Vec<(Field, usize, usize)> = BOLD_LABEL
        .captures_iter(block)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?.as_str().trim();
            LABELS
                .get(name)
                .map(|&field| (field, whole.start(), whole.end()))
        })
        .collect();

    let mut sections = BTreeMap::new();
    for (i, &(field, _, content_start)) in marks.iter().enumerate() {
        let content_end = marks.get(i + 1).map_or(block.len(), |next| next.1);
        sections
            .entry(field)
            .or_insert(&block[content_start..content_end]);
    }
    sections
}

/// 마크다운 블록 하나에서 필드를 추출한다
pub fn extract_markdown(block: &str) -> UnitOutcome {
    let sections = locate_sections(block);
    let text = |field: Field| {
        sections
            .get(&field)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    };

    let raw = RawFields {
        difficulty: text(Field::Difficulty),
        category: text(Field::Category),
        question: text(Field::Question),
        options: sections
            .get(&Field::Options)
            .map(|s| parse_numbered_options(s))
            .unwrap_or_default(),
        answer: text(Field::Answer),
        explanation: text(Field::Explanation),
    };

    raw.into_outcome(String::new(), MARKDOWN_REQUIRED, Difficulty::from_stars)
}

/// `N.` 으로 시작하는 줄에서 번호를 떼고 보기 내용만 남긴다
///
/// 보기는 위치로 번호가 정해지므로 내용이 빈 줄도 자리를 유지한다.
fn parse_numbered_options(section: &str) -> Vec<String> {
    section
        .lines()
        .filter_map(|line| NUMBERED_OPTION.captures(line))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted(outcome: UnitOutcome) -> ExtractedUnit {
        match outcome {
            UnitOutcome::Accepted(unit) => unit,
            UnitOutcome::Rejected { missing } => panic!("누락된 필드: {:?}", missing),
        }
    }

    #[test]
    fn test_delimited_full_set() {
        let lines = [
            "참고내용:",
            "UML은 객체지향 모델링 언어이다.",
            "",
            "다이어그램은 구조와 행위로 나뉜다.",
            "",
            "예시문제:",
            "난이도: 중",
            "문제: 다음 중 구조 다이어그램이 아닌 것은?",
            "① 클래스 다이어그램",
            "② 객체 다이어그램",
            "③ 시퀀스 다이어그램",
            "④ 컴포넌트 다이어그램",
            "정답: 3",
            "해설: 시퀀스 다이어그램은 행위 다이어그램이다.",
        ];

        let unit = accepted(extract_delimited(&lines));

        assert_eq!(
            unit.reference,
            "UML은 객체지향 모델링 언어이다.\n\n다이어그램은 구조와 행위로 나뉜다."
        );
        assert_eq!(unit.example.difficulty, Difficulty::Medium);
        assert_eq!(unit.example.question, "다음 중 구조 다이어그램이 아닌 것은?");
        assert_eq!(
            unit.example.options,
            vec![
                "클래스 다이어그램",
                "객체 다이어그램",
                "시퀀스 다이어그램",
                "컴포넌트 다이어그램"
            ]
        );
        assert_eq!(unit.example.answer, "3");
        assert_eq!(unit.category, None);
    }

    #[test]
    fn test_delimited_keeps_text_after_inner_colon() {
        let lines = [
            "예시문제:",
            "문제: 다음 설명에 해당하는 것은: 요구사항 분석 기법",
            "① 인터뷰",
            "정답: 1",
            "해설: 정답: 인터뷰",
        ];

        let unit = accepted(extract_delimited(&lines));
        assert_eq!(unit.example.question, "다음 설명에 해당하는 것은: 요구사항 분석 기법");
        assert_eq!(unit.example.explanation, "정답: 인터뷰");
    }

    #[test]
    fn test_delimited_multiline_explanation() {
        let lines = [
            "예시문제:",
            "문제: 응집도가 가장 높은 것은?",
            "① 기능적 응집도",
            "② 우연적 응집도",
            "정답: 1",
            "해설: 기능적 응집도가 가장 높다.",
            "",
            "우연적 응집도가 가장 낮다.",
            "",
        ];

        let unit = accepted(extract_delimited(&lines));
        assert_eq!(
            unit.example.explanation,
            "기능적 응집도가 가장 높다.\n\n우연적 응집도가 가장 낮다."
        );
        // 난이도가 없으면 별 0개 규칙에 따라 상
        assert_eq!(unit.example.difficulty, Difficulty::High);
    }

    #[test]
    fn test_delimited_missing_answer_is_rejected() {
        let lines = ["예시문제:", "문제: 질문", "① 하나", "해설: 설명"];
        assert_eq!(
            extract_delimited(&lines),
            UnitOutcome::Rejected {
                missing: vec![Field::Answer]
            }
        );
    }

    #[test]
    fn test_delimited_plain_lines_outside_sections_are_ignored() {
        let lines = [
            "잡담 줄",
            "예시문제:",
            "문제: 질문",
            "① 하나",
            "정답: 1",
            "이 줄은 어디에도 속하지 않는다",
            "해설: 설명",
        ];
        let unit = accepted(extract_delimited(&lines));
        assert_eq!(unit.reference, "");
        assert_eq!(unit.example.answer, "1");
        assert_eq!(unit.example.question, "질문");
    }

    const MARKDOWN_BLOCK: &str = "\
## 문제 1

**난이도**: ★★
**카테고리**: 요구사항 확인

**문제**
다음 중 요구사항 분석 기법이 아닌 것은?

**보기**
1. 인터뷰
2. 프로토타이핑
3. 유스케이스
4. 코드 인스펙션

**정답**: 4

**해설**
코드 인스펙션은 검증 기법이다.

나머지는 요구사항 분석 기법이다.
";

    #[test]
    fn test_markdown_full_block() {
        let unit = accepted(extract_markdown(MARKDOWN_BLOCK));

        assert_eq!(unit.reference, "");
        assert_eq!(unit.category.as_deref(), Some("요구사항 확인"));
        assert_eq!(unit.example.difficulty, Difficulty::Medium);
        assert_eq!(unit.example.question, "다음 중 요구사항 분석 기법이 아닌 것은?");
        assert_eq!(
            unit.example.options,
            vec!["인터뷰", "프로토타이핑", "유스케이스", "코드 인스펙션"]
        );
        assert_eq!(unit.example.answer, "4");
        assert_eq!(
            unit.example.explanation,
            "코드 인스펙션은 검증 기법이다.\n\n나머지는 요구사항 분석 기법이다."
        );
    }

    #[test]
    fn test_markdown_labels_in_any_order() {
        let block = "\
**정답**: 2
**보기**
1. A
2. B
**해설** B 이다
**문제** 무엇인가?
**카테고리**: 테스트
**난이도**: ★";

        let unit = accepted(extract_markdown(block));
        assert_eq!(unit.example.answer, "2");
        assert_eq!(unit.example.options, vec!["A", "B"]);
        assert_eq!(unit.example.explanation, "B 이다");
        assert_eq!(unit.example.question, "무엇인가?");
        assert_eq!(unit.example.difficulty, Difficulty::Low);
    }

    #[test]
    fn test_markdown_three_stars_is_high() {
        let block = MARKDOWN_BLOCK.replace("★★", "★★★");
        let unit = accepted(extract_markdown(&block));
        assert_eq!(unit.example.difficulty, Difficulty::High);
    }

    #[test]
    fn test_markdown_missing_answer_lists_field() {
        let block = MARKDOWN_BLOCK.replace("**정답**: 4", "");
        assert_eq!(
            extract_markdown(&block),
            UnitOutcome::Rejected {
                missing: vec![Field::Answer]
            }
        );
    }

    #[test]
    fn test_markdown_empty_block_misses_everything() {
        match extract_markdown("그냥 문장") {
            UnitOutcome::Rejected { missing } => assert_eq!(missing, MARKDOWN_REQUIRED),
            other => panic!("거부되어야 함: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_bold_text_does_not_split_sections() {
        let block = MARKDOWN_BLOCK.replace(
            "코드 인스펙션은 검증 기법이다.",
            "**주의** 코드 인스펙션은 검증 기법이다.",
        );
        let unit = accepted(extract_markdown(&block));
        assert!(unit.example.explanation.starts_with("**주의** 코드 인스펙션"));
    }

    #[test]
    fn test_repeated_label_first_occurrence_wins() {
        let sections = locate_sections("**정답**: 1\n**해설** 설명\n**정답**: 2\n");
        assert_eq!(sections[&Field::Answer].trim(), "1");
        assert_eq!(sections[&Field::Explanation].trim(), "설명");
    }

    #[test]
    fn test_option_lines_without_number_are_ignored() {
        let options = parse_numbered_options("\n1. 하나\n메모\n2.둘\n3. \n");
        assert_eq!(options, vec!["하나", "둘", ""]);
    }

    #[test]
    fn test_blank_option_keeps_answer_position() {
        let block = MARKDOWN_BLOCK.replace("2. 프로토타이핑", "2. ");
        let unit = accepted(extract_markdown(&block));

        assert_eq!(
            unit.example.options,
            vec!["인터뷰", "", "유스케이스", "코드 인스펙션"]
        );
        assert_eq!(unit.example.answer, "4");
        assert_eq!(unit.example.options[3], "코드 인스펙션");
    }
}
