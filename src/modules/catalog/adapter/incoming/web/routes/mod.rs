mod get_designations;
mod get_languages;

pub use get_designations::{get_designations_handler, __path_get_designations_handler};
pub use get_languages::{get_languages_handler, __path_get_languages_handler};
