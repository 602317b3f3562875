mod cli;
pub mod support;
