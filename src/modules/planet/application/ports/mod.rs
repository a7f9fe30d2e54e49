pub mod appearance_lookup;

pub use appearance_lookup::AppearanceLookup;
