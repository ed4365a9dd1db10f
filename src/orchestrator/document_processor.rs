//! 단일 문서 처리기 - 편성 계층
//!
//! 문서 하나를 읽어 형식에 맞는 파서에 넘기고, 그 문서의 부분 데이터셋과
//! 통계를 돌려준다. 읽기 실패는 호출자에게 오류로 알리고, 호출자는
//! 그 문서만 건너뛴다.

use crate::models::{read_document, DocumentFormat, SourceDocument};
use crate::parser::{parse_delimited, parse_markdown, ParseReport};
use anyhow::{Context, Result};
use tracing::info;

/// 문서 하나를 처리한다
///
/// # 매개변수
/// - `document`: 처리할 문서
/// - `document_index`: 문서 순번 (로그용, 1부터)
pub async fn process_document(
    document: &SourceDocument,
    document_index: usize,
) -> Result<ParseReport> {
    info!(
        "[문서 {}] 처리 중: {}",
        document_index,
        document.path.display()
    );

    let text = read_document(&document.path).await?;
    let source = document.file_name();

    let report = match document.format {
        DocumentFormat::Delimited => parse_delimited(&text, &source),
        DocumentFormat::Markdown => {
            let subject = document
                .subject
                .with_context(|| format!("과목 디렉터리를 알 수 없습니다: {}", source))?;
            parse_markdown(&text, subject, &document.stem(), &source)
        }
    };

    log_document_complete(document_index, &report);
    Ok(report)
}

fn log_document_complete(document_index: usize, report: &ParseReport) {
    info!(
        "[문서 {}] ✓ 세트 {}개 수록, 제외 {}개, 버림 {}개",
        document_index, report.accepted, report.rejected, report.orphaned
    );
}
