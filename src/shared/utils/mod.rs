pub mod logger;

pub use logger::TimedOperation;
