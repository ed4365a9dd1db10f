//! 데이터셋 저장 서비스
//!
//! 최종 데이터셋을 JSON 파일로 쓰고, 저장된 파일을 다시 읽는다.
//! 한글은 이스케이프하지 않고 그대로 쓴다.

use crate::error::{AppError, AppResult, DataError};
use crate::models::Dataset;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// 데이터셋을 JSON 문자열로 만든다 (들여쓰기 2칸)
pub fn to_json(dataset: &Dataset) -> AppResult<String> {
    serde_json::to_string_pretty(dataset).map_err(|e| DataError::SerializeFailed(e).into())
}

/// JSON 문자열에서 데이터셋을 읽는다
pub fn from_json(content: &str, origin: &str) -> AppResult<Dataset> {
    serde_json::from_str(content).map_err(|source| {
        DataError::JsonParseFailed {
            path: origin.to_string(),
            source,
        }
        .into()
    })
}

/// 데이터셋 파일 쓰기
///
/// 같은 폴더의 임시 파일에 먼저 쓴 뒤 이름을 바꾸므로, 쓰기에 실패해도
/// 기존 출력 파일은 그대로 남는다.
pub struct DatasetWriter {
    output_path: PathBuf,
}

impl DatasetWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    /// 데이터셋을 저장한다. 실행이 끝날 때 한 번만 호출한다
    pub async fn write(&self, dataset: Dataset) -> AppResult<()> {
        let json = to_json(&dataset)?;
        let path = &self.output_path;
        let shown = path.display().to_string();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::file_write_failed(parent.display().to_string(), e))?;
        }

        let temp_path = temp_path_for(path);
        fs::write(&temp_path, json.as_bytes())
            .await
            .map_err(|e| AppError::file_write_failed(temp_path.display().to_string(), e))?;
        if let Err(e) = fs::rename(&temp_path, path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(AppError::file_write_failed(shown, e));
        }

        debug!("{} 바이트를 {} 에 썼습니다", json.len(), shown);
        Ok(())
    }
}

/// 저장된 데이터셋 파일을 읽는다
pub async fn read_dataset(path: &Path) -> AppResult<Dataset> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
    from_json(&content, &path.display().to_string())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
