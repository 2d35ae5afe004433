pub mod builder;
pub mod resume;
pub mod scoring;
