use anyhow::Result;
use question_bank_builder::{logger, App, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 설정 로드 (question_bank.toml + 환경 변수)
    let config = Config::load();

    // 로그 초기화
    logger::init_for(&config);

    // 수집 실행
    App::initialize(config).run().await?;

    Ok(())
}
