pub mod career;
pub mod catalog;
