pub mod constants;
pub mod download;
pub mod groups;
pub mod ini;
pub mod patterns;
pub mod rules;
pub mod sort;
pub mod template;
