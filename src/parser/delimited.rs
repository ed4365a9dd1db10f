//! 구분자 텍스트 문서 파서
//!
//! ```text
//! 과목1:소프트웨어 설계 주제:요구사항 확인
//! ===세트 시작===
//! 참고내용:
//! ...
//! 예시문제:
//! 난이도: 중
//! 문제: ...
//! ① ...
//! 정답: 2
//! 해설: ...
//! ===세트 끝===
//! ```

use super::fields::{extract_delimited, UnitOutcome};
use super::{describe_missing, unit_preview, ParseReport};
use crate::models::{QuestionSet, Subject};
use tracing::{debug, warn};

const SUBJECT_PREFIX: &str = "과목";
const TOPIC_MARKER: &str = "주제:";
const SET_START: &str = "===세트 시작===";
const SET_END: &str = "===세트 끝===";

/// `과목<N>:<이름> 주제:<주제>` 헤더
#[derive(Debug, Clone, PartialEq, Eq)]
struct Header {
    subject_id: String,
    subject_name: String,
    topic: Option<String>,
}

/// 문서를 읽어 내려가며 유지하는 현재 과목/주제
#[derive(Debug, Default)]
struct ParserState {
    subject: Option<String>,
    topic: Option<String>,
}

impl ParserState {
    /// 과목과 주제가 모두 정해져 있을 때만 세트를 받을 수 있다
    fn active(&self) -> Option<(String, String)> {
        match (&self.subject, &self.topic) {
            (Some(subject), Some(topic)) => Some((subject.clone(), topic.clone())),
            _ => None,
        }
    }
}

/// `과목` 으로 시작하는 줄을 헤더로 해석한다
///
/// `주제:` 앞은 `<번호>:<과목명>`, 뒤는 주제 이름이다.
/// `:` 가 없는 `과목...` 줄은 헤더가 아니다.
fn parse_header(line: &str) -> Option<Header> {
    let (subject_part, topic_part) = match line.split_once(TOPIC_MARKER) {
        Some((subject, topic)) => (subject, Some(topic)),
        None => (line, None),
    };

    let subject_part = subject_part.trim().strip_prefix(SUBJECT_PREFIX)?;
    let (id, name) = subject_part.split_once(':')?;
    let id = id.trim();
    if id.is_empty() {
        return None;
    }

    Some(Header {
        subject_id: id.to_string(),
        subject_name: name.trim().to_string(),
        topic: topic_part
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string),
    })
}

/// 구분자 텍스트 문서 전체를 파싱한다
///
/// # 매개변수
/// - `text`: 문서 전체 내용
/// - `source`: 진단 메시지에 쓸 문서 이름
pub fn parse_delimited(text: &str, source: &str) -> ParseReport {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text.lines().collect();
    let mut state = ParserState::default();
    let mut report = ParseReport::default();
    let mut set_index = 0;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();

        if line.starts_with(SUBJECT_PREFIX) {
            match parse_header(line) {
                Some(mut header) => {
                    match Subject::from_id(&header.subject_id) {
                        Some(known) if header.subject_name.is_empty() => {
                            header.subject_name = known.name().to_string();
                        }
                        Some(_) => {}
                        None => debug!(
                            "[{}] 알 수 없는 과목 번호: {}",
                            source, header.subject_id
                        ),
                    }
                    let subject = report
                        .dataset
                        .subject_mut(&header.subject_id, &header.subject_name);
                    if let Some(topic) = &header.topic {
                        subject.topic_mut(topic);
                        state.topic = Some(topic.clone());
                    }
                    debug!(
                        "[{}] 헤더: 과목 {} / 주제 {:?}",
                        source, header.subject_id, state.topic
                    );
                    state.subject = Some(header.subject_id);
                }
                None => warn!("[{}] ⚠️ 과목 헤더로 해석할 수 없는 줄을 무시합니다: {}", source, line),
            }
        } else if line == SET_START {
            set_index += 1;
            let opened_under = state.active();

            let body_start = i + 1;
            let mut body_end = body_start;
            while body_end < lines.len() && lines[body_end].trim() != SET_END {
                body_end += 1;
            }
            if body_end == lines.len() {
                debug!(
                    "[{}] 세트 {}: 끝 표시 없이 문서가 끝났습니다",
                    source, set_index
                );
            }

            let body = &lines[body_start..body_end];
            match (opened_under, extract_delimited(body)) {
                (None, _) => {
                    debug!(
                        "[{}] 세트 {}: 과목/주제가 정해지기 전이라 버립니다",
                        source, set_index
                    );
                    report.orphaned += 1;
                }
                (Some(_), UnitOutcome::Rejected { missing }) => {
                    warn!(
                        "[{}] ⚠️ 세트 {} 제외 - 누락 필드: {} ({})",
                        source,
                        set_index,
                        describe_missing(&missing),
                        unit_preview(&body.join("\n"))
                    );
                    report.rejected += 1;
                }
                (Some((subject_id, topic)), UnitOutcome::Accepted(unit)) => {
                    report
                        .dataset
                        .subject_mut(&subject_id, "")
                        .topic_mut(&topic)
                        .sets
                        .push(QuestionSet::new(unit.reference, unit.example));
                    report.accepted += 1;
                }
            }

            i = body_end;
        }

        i += 1;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    const ONE_SET: &str = "\
과목1:소프트웨어 설계 주제:요구사항 확인
===세트 시작===
참고내용:
요구사항은 기능과 비기능으로 나뉜다.
예시문제:
난이도: 하
문제: 비기능 요구사항에 해당하는 것은?
① 로그인 기능
② 응답 시간 3초 이내
③ 회원 가입
④ 게시글 작성
정답: 2
해설: 성능은 비기능 요구사항이다.
===세트 끝===
";

    #[test]
    fn test_one_header_one_set() {
        let report = parse_delimited(ONE_SET, "test.txt");

        assert_eq!(report.accepted, 1);
        assert_eq!(report.dataset.subject_count(), 1);
        let subject = report.dataset.subject("1").unwrap();
        assert_eq!(subject.name, "소프트웨어 설계");
        assert_eq!(subject.topics.len(), 1);

        let sets = &subject.topics["요구사항 확인"].sets;
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].reference, "요구사항은 기능과 비기능으로 나뉜다.");
        assert_eq!(sets[0].example.difficulty, Difficulty::Low);
        assert_eq!(sets[0].example.options.len(), 4);
        assert_eq!(sets[0].example.answer, "2");
    }

    #[test]
    fn test_set_without_header_is_discarded() {
        let text = ONE_SET.lines().skip(1).collect::<Vec<_>>().join("\n");
        let report = parse_delimited(&text, "test.txt");

        assert!(report.dataset.is_empty());
        assert_eq!(report.accepted, 0);
        assert_eq!(report.orphaned, 1);
    }

    #[test]
    fn test_subject_without_topic_is_not_active() {
        let text = ONE_SET.replace(" 주제:요구사항 확인", "");
        let report = parse_delimited(&text, "test.txt");

        assert_eq!(report.dataset.set_count(), 0);
        assert_eq!(report.orphaned, 1);
        assert!(report.dataset.subject("1").unwrap().topics.is_empty());
    }

    #[test]
    fn test_topic_persists_across_subject_change() {
        let body = ONE_SET.lines().skip(1).collect::<Vec<_>>().join("\n");
        let text = format!("{}과목2:소프트웨어 개발\n{}", ONE_SET, body);
        let report = parse_delimited(&text, "test.txt");

        assert_eq!(report.accepted, 2);
        assert_eq!(report.dataset.subject("2").unwrap().name, "소프트웨어 개발");
        assert_eq!(
            report.dataset.subject("2").unwrap().topics["요구사항 확인"].sets.len(),
            1
        );
    }

    #[test]
    fn test_repeated_header_appends_to_same_topic() {
        let text = format!("{}{}", ONE_SET, ONE_SET);
        let report = parse_delimited(&text, "test.txt");

        assert_eq!(report.dataset.topic_count(), 1);
        assert_eq!(report.dataset.set_count(), 2);
    }

    #[test]
    fn test_unterminated_set_at_end_is_included() {
        let text = ONE_SET.replace("===세트 끝===\n", "");
        let report = parse_delimited(&text, "test.txt");

        assert_eq!(report.accepted, 1);
        assert_eq!(
            report.dataset.subject("1").unwrap().topics["요구사항 확인"].sets[0]
                .example
                .explanation,
            "성능은 비기능 요구사항이다."
        );
    }

    #[test]
    fn test_incomplete_set_is_rejected_not_inserted() {
        let text = ONE_SET.replace("정답: 2\n", "");
        let report = parse_delimited(&text, "test.txt");

        assert_eq!(report.rejected, 1);
        assert_eq!(report.dataset.set_count(), 0);
        // 헤더로 만들어진 주제는 남는다
        assert_eq!(report.dataset.topic_count(), 1);
    }

    #[test]
    fn test_header_parsing_variants() {
        assert_eq!(
            parse_header("과목 3: 데이터베이스 구축 주제: 물리 설계"),
            Some(Header {
                subject_id: "3".to_string(),
                subject_name: "데이터베이스 구축".to_string(),
                topic: Some("물리 설계".to_string()),
            })
        );
        assert_eq!(
            parse_header("과목4:프로그래밍 언어 활용 "),
            Some(Header {
                subject_id: "4".to_string(),
                subject_name: "프로그래밍 언어 활용".to_string(),
                topic: None,
            })
        );
        assert_eq!(parse_header("과목:이름 없는 번호"), None);
        assert_eq!(parse_header("과목별 안내 문서"), None);
    }

    #[test]
    fn test_prose_subject_line_does_not_capture_sets() {
        let mut lines: Vec<&str> = ONE_SET.lines().collect();
        lines.insert(1, "과목별 안내 문서");
        let report = parse_delimited(&lines.join("\n"), "test.txt");

        assert_eq!(report.dataset.subject_count(), 1);
        assert_eq!(report.accepted, 1);
        assert_eq!(
            report.dataset.subject("1").unwrap().topics["요구사항 확인"].sets.len(),
            1
        );
    }

    #[test]
    fn test_leading_bom_is_ignored() {
        let text = format!("\u{feff}{}", ONE_SET);
        let report = parse_delimited(&text, "test.txt");

        assert_eq!(report.accepted, 1);
        assert_eq!(report.orphaned, 0);
        assert_eq!(report.dataset.subject("1").unwrap().name, "소프트웨어 설계");
    }

    #[test]
    fn test_header_without_name_uses_subject_table() {
        let text = ONE_SET.replace("과목1:소프트웨어 설계", "과목 5:");
        let report = parse_delimited(&text, "test.txt");

        assert_eq!(report.dataset.subject("5").unwrap().name, "정보시스템 구축 관리");
        assert_eq!(report.accepted, 1);
    }

    #[test]
    fn test_header_inside_set_is_reference_text() {
        let text = ONE_SET.replace(
            "요구사항은 기능과 비기능으로 나뉜다.",
            "과목2:다른 과목 주제:다른 주제",
        );
        let report = parse_delimited(&text, "test.txt");

        assert!(report.dataset.subject("2").is_none());
        let set = &report.dataset.subject("1").unwrap().topics["요구사항 확인"].sets[0];
        assert_eq!(set.reference, "과목2:다른 과목 주제:다른 주제");
    }
}
