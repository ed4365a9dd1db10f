/// 과목 열거형 (정보처리기사 필기 1~5과목)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subject {
    /// 1과목
    SoftwareDesign = 1,
    /// 2과목
    SoftwareDevelopment = 2,
    /// 3과목
    DatabaseConstruction = 3,
    /// 4과목
    ProgrammingLanguage = 4,
    /// 5과목
    InformationSystemManagement = 5,
}

impl Subject {
    /// 순서대로 나열한 전체 과목
    pub const ALL: [Subject; 5] = [
        Subject::SoftwareDesign,
        Subject::SoftwareDevelopment,
        Subject::DatabaseConstruction,
        Subject::ProgrammingLanguage,
        Subject::InformationSystemManagement,
    ];

    /// 과목 번호 (1~5)
    pub fn number(self) -> u8 {
        self as u8
    }

    /// 데이터셋 키로 쓰는 과목 ID ("1" ~ "5")
    pub fn id(self) -> String {
        self.number().to_string()
    }

    /// 표준 과목명
    pub fn name(self) -> &'static str {
        match self {
            Subject::SoftwareDesign => "소프트웨어 설계",
            Subject::SoftwareDevelopment => "소프트웨어 개발",
            Subject::DatabaseConstruction => "데이터베이스 구축",
            Subject::ProgrammingLanguage => "프로그래밍 언어 활용",
            Subject::InformationSystemManagement => "정보시스템 구축 관리",
        }
    }

    /// 마크다운 문서가 들어 있는 디렉터리 이름 (예: `1과목`)
    pub fn dir_name(self) -> String {
        format!("{}과목", self.number())
    }

    /// 번호로 과목 찾기
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == number)
    }

    /// 과목 ID 문자열로 찾기 (앞뒤 공백 허용)
    pub fn from_id(id: &str) -> Option<Self> {
        id.trim().parse::<u8>().ok().and_then(Self::from_number)
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}과목({})", self.number(), self.name())
    }
}
