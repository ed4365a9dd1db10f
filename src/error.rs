use thiserror::Error;

/// 애플리케이션 오류 타입
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 작업 오류
    #[error("파일 오류: {0}")]
    File(#[from] FileError),
    /// 설정 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 데이터셋 오류
    #[error("데이터 오류: {0}")]
    Data(#[from] DataError),
}

/// 파일 작업 오류
#[derive(Debug, Error)]
pub enum FileError {
    /// 디렉터리 읽기 실패
    #[error("디렉터리 읽기 실패 ({path}): {source}")]
    DirectoryReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 디렉터리 생성 실패
    #[error("디렉터리 생성 실패 ({path}): {source}")]
    DirectoryCreateFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 파일 읽기 실패 (없는 파일, UTF-8 이 아닌 내용 포함)
    #[error("파일 읽기 실패 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 설정 오류
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 설정 파일 파싱 실패
    #[error("설정 파일 파싱 실패 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 알 수 없는 병합 정책
    #[error("알 수 없는 병합 정책: '{value}' (append 또는 overwrite)")]
    UnknownMergePolicy { value: String },
}

/// 데이터셋 직렬화/역직렬화 오류
#[derive(Debug, Error)]
pub enum DataError {
    /// JSON 직렬화 실패
    #[error("JSON 직렬화 실패: {0}")]
    SerializeFailed(#[source] serde_json::Error),
    /// JSON 파싱 실패
    #[error("JSON 파싱 실패 ({path}): {source}")]
    JsonParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

// ========== 편의 생성 함수 ==========

impl AppError {
    /// 파일 읽기 오류 생성
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 파일 쓰기 오류 생성
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 디렉터리 읽기 오류 생성
    pub fn directory_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::DirectoryReadFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 타입 별칭 ==========

/// 애플리케이션 결과 타입
pub type AppResult<T> = Result<T, AppError>;
