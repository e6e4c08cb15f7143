pub mod exercise;
pub mod plan;
pub mod profile;
pub mod template;
