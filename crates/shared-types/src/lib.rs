pub mod types;

pub use types::{
    AnalysisResult, AnalysisSource, ConsentItem, ContractRating, Document, DocumentType, RedFlag,
    Section, Severity, SourceRecord, UnknownDocumentType,
};
