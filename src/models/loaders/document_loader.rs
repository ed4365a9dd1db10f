use crate::error::{AppError, AppResult, FileError};
use crate::models::subject::Subject;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// 원본 문서 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `===세트 시작===` / `===세트 끝===` 구분자 텍스트 (.txt)
    Delimited,
    /// `**라벨**` 과 `---` 구분선을 쓰는 마크다운 (.md)
    Markdown,
}

/// 처리 대상 문서
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub format: DocumentFormat,
    /// 마크다운 문서는 디렉터리로 과목이 정해진다
    pub subject: Option<Subject>,
}

impl SourceDocument {
    /// 파일 이름(확장자 제외). 마크다운 문서에서는 주제 이름으로 쓴다
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

/// 텍스트 형식 입력 폴더에서 `.txt` 문서를 찾는다
///
/// 폴더가 없으면 `create_missing` 에 따라 폴더를 만들고 빈 목록을 돌려준다.
pub async fn discover_delimited_documents(
    dir: &Path,
    create_missing: bool,
) -> AppResult<Vec<SourceDocument>> {
    if !dir.exists() {
        if create_missing {
            info!(
                "입력 디렉터리가 없습니다. {} 디렉터리를 생성합니다",
                dir.display()
            );
            fs::create_dir_all(dir).await.map_err(|source| {
                AppError::File(FileError::DirectoryCreateFailed {
                    path: dir.display().to_string(),
                    source,
                })
            })?;
        } else {
            warn!("⚠️ 입력 디렉터리가 없습니다: {}", dir.display());
        }
        return Ok(Vec::new());
    }

    let paths = list_files_with_extension(dir, "txt").await?;
    Ok(paths
        .into_iter()
        .map(|path| SourceDocument {
            path,
            format: DocumentFormat::Delimited,
            subject: None,
        })
        .collect())
}

/// `<root>/1과목` ~ `<root>/5과목` 에서 `.md` 문서를 찾는다
///
/// 과목 디렉터리가 없으면 경고만 남기고 건너뛴다.
pub async fn discover_markdown_documents(root: &Path) -> AppResult<Vec<SourceDocument>> {
    if !root.exists() {
        debug!("마크다운 루트가 없습니다: {}", root.display());
        return Ok(Vec::new());
    }

    let mut documents = Vec::new();
    for subject in Subject::ALL {
        let dir = root.join(subject.dir_name());
        if !dir.is_dir() {
            warn!("⚠️ {} 디렉터리가 없습니다. 건너뜁니다", dir.display());
            continue;
        }

        let paths = list_files_with_extension(&dir, "md").await?;
        debug!("{}: 마크다운 문서 {}개", subject, paths.len());
        documents.extend(paths.into_iter().map(|path| SourceDocument {
            path,
            format: DocumentFormat::Markdown,
            subject: Some(subject),
        }));
    }

    Ok(documents)
}

/// 문서 전체를 읽는다
pub async fn read_document(path: &Path) -> AppResult<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))
}

/// 디렉터리 안에서 확장자가 일치하는 파일을 이름순으로 모은다
async fn list_files_with_extension(dir: &Path, extension: &str) -> AppResult<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| AppError::directory_read_failed(dir.display().to_string(), e))?;

    let mut paths = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::directory_read_failed(dir.display().to_string(), e))?
    {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(extension) {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}
