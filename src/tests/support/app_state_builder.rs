use crate::career::application::career_use_cases::CareerUseCases;
use crate::career::application::ports::incoming::use_cases::{
    CreateCareerUseCase, GetCareersUseCase, RecommendCareersUseCase,
};
use crate::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::catalog::application::ports::incoming::use_cases::{
    GetDesignationsUseCase, GetLanguagesUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    career: CareerUseCases,
    catalog: CatalogUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            career: CareerUseCases {
                recommend: Arc::new(StubRecommendCareersUseCase),
                get_list: Arc::new(StubGetCareersUseCase::success(vec![])),
                create: Arc::new(StubCreateCareerUseCase),
            },
            catalog: CatalogUseCases {
                get_languages: Arc::new(StubGetLanguagesUseCase::success(vec![])),
                get_designations: Arc::new(StubGetDesignationsUseCase::success(vec![])),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_recommend(
        mut self,
        uc: impl RecommendCareersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.career.recommend = Arc::new(uc);
        self
    }

    pub fn with_get_careers(mut self, uc: impl GetCareersUseCase + Send + Sync + 'static) -> Self {
        self.career.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_career(
        mut self,
        uc: impl CreateCareerUseCase + Send + Sync + 'static,
    ) -> Self {
        self.career.create = Arc::new(uc);
        self
    }

    pub fn with_get_languages(
        mut self,
        uc: impl GetLanguagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.catalog.get_languages = Arc::new(uc);
        self
    }

    pub fn with_get_designations(
        mut self,
        uc: impl GetDesignationsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.catalog.get_designations = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            career: self.career,
            catalog: self.catalog,
        })
    }
}
