pub mod entity_set;
pub mod job_status;
pub mod sentiment;

pub use entity_set::EntitySet;
pub use job_status::JobStatus;
pub use sentiment::{Sentiment, Tone};
