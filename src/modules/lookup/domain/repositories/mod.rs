mod candidate_fetcher;

pub use candidate_fetcher::*;
