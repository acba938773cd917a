pub mod container;
pub mod external_services;
pub mod memory;

// Re-export commonly used items
pub use external_services::GeminiAnalysisProvider;
pub use memory::InMemoryJobRegistry;
