//! # Question Bank Builder
//!
//! 정보처리기사 문제 작성 문서를 모아 하나의 문제은행 데이터셋(JSON)으로 만드는 도구
//!
//! ## 구조
//!
//! ### ① 모델 계층（Models）
//! - `models/` - 과목 → 주제 → 세트 → 예시 문제 데이터 구조, 문서 탐색/읽기
//!
//! ### ② 파싱 계층（Parser）
//! - `parser::fields` - 문항 하나의 필드 추출 (수록 / 제외 + 누락 필드)
//! - `parser::delimited` - `===세트 시작===` 구분자 텍스트 문서
//! - `parser::markdown` - `**라벨**` + `---` 마크다운 문서
//!
//! ### ③ 서비스 계층（Services）
//! - `DatasetMerger` - 문서별 결과를 하나의 데이터셋으로 병합
//! - `DatasetWriter` - JSON 저장 / 읽기
//! - `find_examples` - 과목·주제·난이도별 예시 문제 조회
//!
//! ### ④ 편성 계층（Orchestration）
//! - `orchestrator::ingest_runner` - 전체 실행 (탐색 → 문서별 처리 → 병합 → 저장)
//! - `orchestrator::document_processor` - 문서 하나 처리

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod services;
pub mod utils;

// 자주 쓰는 타입 재노출
pub use config::{Config, MergePolicy};
pub use error::{AppError, AppResult};
pub use models::{Dataset, Difficulty, Example, QuestionSet, Subject, SubjectEntry, Topic};
pub use orchestrator::{App, RunSummary};
pub use parser::{parse_delimited, parse_markdown, ParseReport, UnitOutcome};
pub use services::{find_examples, merge, read_dataset, DatasetMerger, DatasetWriter};
pub use utils::logging as logger;
