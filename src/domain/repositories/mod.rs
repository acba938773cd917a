pub mod job_registry;

pub use job_registry::{JobRegistry, JobTransition};
