pub mod appearance_matcher;

pub use appearance_matcher::AppearanceMatcher;
