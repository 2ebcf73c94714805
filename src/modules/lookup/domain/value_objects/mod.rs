mod paginated_search;

pub use paginated_search::*;
