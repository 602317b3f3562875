mod get_designations_service;
mod get_languages_service;
mod seed_catalog_service;

pub use get_designations_service::GetDesignationsService;
pub use get_languages_service::GetLanguagesService;
pub use seed_catalog_service::SeedCatalogService;
