//! 수집 실행기 - 편성 계층
//!
//! ## 역할
//!
//! 1. **문서 탐색**: 텍스트 입력 폴더와 `N과목` 마크다운 폴더에서 문서를 찾는다
//! 2. **순차 처리**: 문서를 하나씩 읽고 파싱해서 바로 병합한다
//! 3. **실패 격리**: 문서 하나가 실패해도 기록만 하고 다음 문서로 넘어간다
//! 4. **저장**: 모든 문서를 처리한 뒤 데이터셋을 한 번 저장한다
//! 5. **통계**: 실행 결과를 요약해서 출력한다

use crate::config::Config;
use crate::models::{discover_delimited_documents, discover_markdown_documents, SourceDocument};
use crate::orchestrator::document_processor;
use crate::services::{topic_catalog, DatasetMerger, DatasetWriter};
use crate::utils::logging::{log_documents_found, log_startup, print_final_stats};
use anyhow::Result;
use std::path::Path;
use tracing::{error, info, warn};

/// 실행 결과 요약
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// 발견한 문서 수
    pub documents: usize,
    /// 읽기/처리에 실패한 문서 수
    pub failed: usize,
    /// 수록된 세트 수
    pub accepted_sets: usize,
    /// 필수 필드 누락으로 제외된 문항 수
    pub rejected_units: usize,
    /// 과목/주제 없이 나와 버려진 세트 수
    pub orphaned_sets: usize,
    /// 출력 파일을 썼는지 여부
    pub output_written: bool,
}

/// 애플리케이션 본체
pub struct App {
    config: Config,
}

impl App {
    /// 애플리케이션 초기화
    pub fn initialize(config: Config) -> Self {
        log_startup(&config);
        Self { config }
    }

    /// 수집 실행
    ///
    /// 입력이 없거나 결과가 비어 있으면 아무것도 쓰지 않고 끝난다 (오류 아님).
    pub async fn run(&self) -> Result<RunSummary> {
        let documents = self.discover_documents().await;
        let mut summary = RunSummary {
            documents: documents.len(),
            ..Default::default()
        };

        if documents.is_empty() {
            warn!(
                "⚠️ 경고: {} 와 {} 에 처리할 문서가 없습니다. 실행을 종료합니다",
                self.config.input_dir, self.config.markdown_root
            );
            return Ok(summary);
        }

        let mut merger = DatasetMerger::new(self.config.merge_policy);
        for (index, document) in documents.iter().enumerate() {
            let document_index = index + 1;
            match document_processor::process_document(document, document_index).await {
                Ok(report) => {
                    summary.accepted_sets += report.accepted;
                    summary.rejected_units += report.rejected;
                    summary.orphaned_sets += report.orphaned;
                    merger.merge(report.dataset);
                }
                Err(e) => {
                    error!(
                        "[문서 {}] ❌ 파일 처리 중 오류 발생: {}, 오류: {:#}",
                        document_index,
                        document.path.display(),
                        e
                    );
                    summary.failed += 1;
                }
            }
        }

        let dataset = merger.finish();
        if dataset.is_empty() {
            warn!("⚠️ 처리된 데이터가 없습니다. 출력 파일을 쓰지 않습니다");
            return Ok(summary);
        }

        for subject in topic_catalog(&dataset) {
            info!(
                "📚 {}과목 {}: 주제 {}개, 세트 {}개",
                subject.id,
                subject.name,
                subject.topics.len(),
                subject.set_count
            );
        }

        if let Err(e) = DatasetWriter::new(&self.config.output_file)
            .write(dataset)
            .await
        {
            error!(
                "❌ 데이터셋 저장 실패: {}, 오류: {}",
                self.config.output_file, e
            );
            return Ok(summary);
        }
        summary.output_written = true;

        print_final_stats(
            summary.documents,
            summary.failed,
            summary.accepted_sets,
            summary.rejected_units,
            &self.config.output_file,
        );

        Ok(summary)
    }

    /// 두 형식의 문서를 모두 찾는다. 탐색 실패는 해당 형식을 비어 있는 것으로 본다
    async fn discover_documents(&self) -> Vec<SourceDocument> {
        info!("\n📁 처리할 문서를 찾는 중...");

        let delimited = discover_delimited_documents(
            Path::new(&self.config.input_dir),
            self.config.create_missing_input_dir,
        )
        .await
        .unwrap_or_else(|e| {
            error!("❌ 텍스트 문서 탐색 실패: {}", e);
            Vec::new()
        });

        let markdown = discover_markdown_documents(Path::new(&self.config.markdown_root))
            .await
            .unwrap_or_else(|e| {
                error!("❌ 마크다운 문서 탐색 실패: {}", e);
                Vec::new()
            });

        log_documents_found(delimited.len(), markdown.len());
        delimited.into_iter().chain(markdown).collect()
    }
}
