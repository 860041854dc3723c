pub mod cache;
pub mod cms;
pub mod content;

pub use cms::CmsClient;
