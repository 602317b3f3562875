pub mod designations;
pub mod languages;
