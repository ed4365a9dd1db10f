//! 편성 계층 (Orchestration Layer)
//!
//! ```text
//! ingest_runner (문서 목록, 병합, 저장)
//!     ↓
//! document_processor (문서 하나 읽기 + 파서 선택)
//!     ↓
//! parser (delimited / markdown → fields)
//!     ↓
//! services (merger / writer / finder)
//! ```
//!
//! 문서는 하나씩 순서대로 처리되며, 누적 데이터셋은 병합기만 소유한다.

pub mod document_processor;
pub mod ingest_runner;

pub use document_processor::process_document;
pub use ingest_runner::{App, RunSummary};
