pub mod entities;
pub mod matcher;
