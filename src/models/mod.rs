pub mod dataset;
pub mod loaders;
pub mod subject;

pub use dataset::{Dataset, Difficulty, Example, QuestionSet, SubjectEntry, Topic};
pub use loaders::{
    discover_delimited_documents, discover_markdown_documents, read_document, DocumentFormat,
    SourceDocument,
};
pub use subject::Subject;
