pub mod fallback;
pub mod projects;
