pub mod app_state_builder;
pub mod career_fixtures;
pub mod stubs;
