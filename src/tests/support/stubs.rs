use async_trait::async_trait;

use crate::career::application::{
    domain::{
        entities::{CareerRecord, NewCareer},
        matcher::Recommendation,
    },
    ports::incoming::use_cases::{
        CreateCareerError, CreateCareerUseCase, GetCareersError, GetCareersUseCase,
        RecommendCareersError, RecommendCareersUseCase,
    },
};
use crate::catalog::application::{
    domain::entities::{Designation, Language},
    ports::incoming::use_cases::{
        GetDesignationsError, GetDesignationsUseCase, GetLanguagesError, GetLanguagesUseCase,
    },
};

// ============================================================
// Career
// ============================================================

#[derive(Default, Clone)]
pub struct StubRecommendCareersUseCase;

#[async_trait]
impl RecommendCareersUseCase for StubRecommendCareersUseCase {
    async fn execute(&self, _input: &str) -> Result<Vec<Recommendation>, RecommendCareersError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Clone)]
pub struct StubGetCareersUseCase {
    result: Result<Vec<CareerRecord>, GetCareersError>,
}

impl StubGetCareersUseCase {
    pub fn success(data: Vec<CareerRecord>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetCareersError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetCareersUseCase for StubGetCareersUseCase {
    async fn execute(&self) -> Result<Vec<CareerRecord>, GetCareersError> {
        self.result.clone()
    }
}

#[derive(Default, Clone)]
pub struct StubCreateCareerUseCase;

#[async_trait]
impl CreateCareerUseCase for StubCreateCareerUseCase {
    async fn execute(&self, _career: NewCareer) -> Result<CareerRecord, CreateCareerError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================
// Catalog
// ============================================================

#[derive(Clone)]
pub struct StubGetLanguagesUseCase {
    result: Result<Vec<Language>, GetLanguagesError>,
}

impl StubGetLanguagesUseCase {
    pub fn success(data: Vec<Language>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetLanguagesError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetLanguagesUseCase for StubGetLanguagesUseCase {
    async fn execute(&self) -> Result<Vec<Language>, GetLanguagesError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetDesignationsUseCase {
    result: Result<Vec<Designation>, GetDesignationsError>,
}

impl StubGetDesignationsUseCase {
    pub fn success(data: Vec<Designation>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetDesignationsError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetDesignationsUseCase for StubGetDesignationsUseCase {
    async fn execute(&self) -> Result<Vec<Designation>, GetDesignationsError> {
        self.result.clone()
    }
}
