// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns (pagination)
pub mod errors; // Shared error types
pub mod utils; // Shared utilities (logging)

// Re-exports for convenience
pub use application::{PaginatedResult, PaginationParams};
pub use errors::{AppError, AppResult};
