use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// 설정 파일 기본 경로
pub const DEFAULT_CONFIG_FILE: &str = "question_bank.toml";

/// 같은 과목 안에서 주제 이름이 겹칠 때의 처리 방식
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergePolicy {
    /// 기존 주제 뒤에 새 세트를 덧붙임
    #[default]
    Append,
    /// 기존 주제의 세트를 새 문서의 세트로 교체
    Overwrite,
}

impl FromStr for MergePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "append" => Ok(MergePolicy::Append),
            "overwrite" => Ok(MergePolicy::Overwrite),
            _ => Err(ConfigError::UnknownMergePolicy {
                value: s.to_string(),
            }),
        }
    }
}

/// 프로그램 설정
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 구분자 텍스트 형식(.txt) 문서 폴더
    pub input_dir: String,
    /// 마크다운 형식 문서의 루트 (`1과목` ~ `5과목` 디렉터리를 담는 폴더)
    pub markdown_root: String,
    /// 출력 JSON 파일
    pub output_file: String,
    /// 주제 충돌 시 병합 정책
    pub merge_policy: MergePolicy,
    /// 입력 폴더가 없으면 생성할지 여부
    pub create_missing_input_dir: bool,
    /// 상세 로그 출력 여부
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: "input_texts".to_string(),
            markdown_root: "input_markdown".to_string(),
            output_file: "gisa_questions.json".to_string(),
            merge_policy: MergePolicy::Append,
            create_missing_input_dir: true,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 설정 파일(있으면)과 환경 변수를 합쳐 설정을 만든다
    ///
    /// 설정 파일이 깨져 있으면 경고 후 기본값을 사용한다.
    pub fn load() -> Self {
        let path = std::env::var("QUESTION_BANK_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let base = match Self::from_file(Path::new(&path)) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                // 로거 초기화 이전일 수 있으므로 표준 출력으로도 남긴다
                println!("⚠️ {}, 기본 설정을 사용합니다", e);
                Self::default()
            }
        };

        base.with_env_overrides()
    }

    /// TOML 설정 파일을 읽는다. 파일이 없으면 `None`
    pub fn from_file(path: &Path) -> AppResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::AppError::file_read_failed(path.display().to_string(), e))?;

        Self::from_toml_str(&content, &path.display().to_string()).map(Some)
    }

    /// TOML 문자열에서 설정을 파싱한다
    pub fn from_toml_str(content: &str, origin: &str) -> AppResult<Self> {
        let config: Config = toml::from_str(content).map_err(|source| {
            ConfigError::TomlParseFailed {
                path: origin.to_string(),
                source,
            }
        })?;
        Ok(config)
    }

    /// 환경 변수 값으로 덮어쓴다. 해석할 수 없는 값은 무시한다
    pub fn with_env_overrides(self) -> Self {
        Self {
            input_dir: std::env::var("INPUT_DIR").unwrap_or(self.input_dir),
            markdown_root: std::env::var("MARKDOWN_ROOT").unwrap_or(self.markdown_root),
            output_file: std::env::var("OUTPUT_FILE").unwrap_or(self.output_file),
            merge_policy: std::env::var("MERGE_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.merge_policy),
            create_missing_input_dir: std::env::var("CREATE_MISSING_INPUT_DIR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.create_missing_input_dir),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.verbose_logging),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            output_file = "out/dataset.json"
            merge_policy = "overwrite"
            "#,
            "inline",
        )
        .unwrap();

        assert_eq!(config.output_file, "out/dataset.json");
        assert_eq!(config.merge_policy, MergePolicy::Overwrite);
        assert_eq!(config.input_dir, "input_texts");
        assert!(config.create_missing_input_dir);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = Config::from_toml_str("output_file = [", "broken.toml").unwrap_err();
        assert!(matches!(
            err,
            crate::error::AppError::Config(ConfigError::TomlParseFailed { .. })
        ));
    }

    #[test]
    fn test_merge_policy_from_str() {
        assert_eq!("Append".parse::<MergePolicy>().unwrap(), MergePolicy::Append);
        assert_eq!(" overwrite ".parse::<MergePolicy>().unwrap(), MergePolicy::Overwrite);
        assert!("replace".parse::<MergePolicy>().is_err());
    }

    #[test]
    fn test_missing_config_file_is_none() {
        let result = Config::from_file(Path::new("definitely/not/here.toml")).unwrap();
        assert!(result.is_none());
    }
}
