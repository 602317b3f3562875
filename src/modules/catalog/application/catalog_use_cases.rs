use std::sync::Arc;

use crate::catalog::application::ports::incoming::use_cases::{
    GetDesignationsUseCase, GetLanguagesUseCase,
};

#[derive(Clone)]
pub struct CatalogUseCases {
    pub get_languages: Arc<dyn GetLanguagesUseCase + Send + Sync>,
    pub get_designations: Arc<dyn GetDesignationsUseCase + Send + Sync>,
}
