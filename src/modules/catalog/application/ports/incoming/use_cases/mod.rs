mod get_designations_use_case;
mod get_languages_use_case;
mod seed_catalog_use_case;

pub use get_designations_use_case::{GetDesignationsError, GetDesignationsUseCase};
pub use get_languages_use_case::{GetLanguagesError, GetLanguagesUseCase};
pub use seed_catalog_use_case::{CatalogBackups, SeedCatalogError, SeedCatalogUseCase};
