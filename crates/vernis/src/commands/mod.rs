pub mod gallery;
pub mod page;
pub mod render;
pub mod resolve;
pub mod sanitize;
