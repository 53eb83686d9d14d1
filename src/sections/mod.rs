// src/sections/mod.rs
//! Typed content records for each site section, with the static content shown
//! when the CMS is unreachable or empty.

pub mod about;
pub mod articles;
pub mod global;
pub mod hero;
pub mod projects;

pub use about::About;
pub use articles::Article;
pub use global::GlobalSetting;
pub use hero::Hero;
pub use projects::{Project, ProjectListing};
