// src/config/mod.rs
pub mod cms;

pub use cms::CmsConfig;
