pub mod document_loader;

pub use document_loader::{
    discover_delimited_documents, discover_markdown_documents, read_document, DocumentFormat,
    SourceDocument,
};
