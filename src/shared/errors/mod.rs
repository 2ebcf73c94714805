mod app_error;

pub use app_error::AppError;

/// Convenience alias used across all bounded contexts
pub type AppResult<T> = Result<T, AppError>;
