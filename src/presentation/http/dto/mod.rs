pub mod analysis_dto;
pub mod document_dto;
pub mod job_record_dto;
pub mod response_dto;

pub use analysis_dto::*;
pub use document_dto::*;
pub use job_record_dto::*;
pub use response_dto::*;
