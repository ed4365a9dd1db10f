/// 로그 도구 모듈
///
/// 로거 초기화와 실행 로그 출력 보조 함수를 제공한다
use crate::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 표준 출력 로거 초기화
///
/// `RUST_LOG` 가 설정되어 있으면 그 값을, 아니면 `info` 를 사용한다.
/// 이미 초기화된 경우(테스트 등)에는 조용히 넘어간다.
pub fn init() {
    init_with_level("info");
}

/// 설정에 맞춰 로거 초기화 (`verbose_logging` 이면 `debug`)
pub fn init_for(config: &Config) {
    init_with_level(if config.verbose_logging { "debug" } else { "info" });
}

fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .try_init();
}

/// 프로그램 시작 정보 출력
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 문제은행 데이터셋 생성 시작");
    info!("📁 텍스트 입력 폴더: {}", config.input_dir);
    info!("📁 마크다운 입력 폴더: {}", config.markdown_root);
    info!("📄 출력 파일: {}", config.output_file);
    info!("🔀 병합 정책: {:?}", config.merge_policy);
    info!("{}", "=".repeat(60));
}

/// 문서 탐색 결과 출력
///
/// # 매개변수
/// - `delimited`: 텍스트 형식 문서 수
/// - `markdown`: 마크다운 형식 문서 수
pub fn log_documents_found(delimited: usize, markdown: usize) {
    info!(
        "✓ 처리할 문서 {}개 발견 (텍스트 {}개, 마크다운 {}개)",
        delimited + markdown,
        delimited,
        markdown
    );
}

/// 최종 통계 출력
pub fn print_final_stats(
    documents: usize,
    failed: usize,
    accepted_sets: usize,
    rejected_units: usize,
    output_file: &str,
) {
    info!("\n{}", "=".repeat(60));
    info!("📊 전체 처리 완료 통계");
    info!(
        "완료 시간: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 처리한 문서: {}/{}", documents - failed, documents);
    info!("❌ 실패한 문서: {}", failed);
    info!("🧩 수록된 세트: {}", accepted_sets);
    info!("🗑️ 제외된 문항: {}", rejected_units);
    info!("{}", "=".repeat(60));
    info!("\n데이터가 {} 로 저장되었습니다", output_file);
}

/// 긴 텍스트를 로그 표시용으로 자른다
///
/// # 매개변수
/// - `text`: 원본 텍스트
/// - `max_len`: 최대 글자 수
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
