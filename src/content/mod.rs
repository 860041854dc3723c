//! Flat, presentation-ready domain records and the normalizers that
//! produce them from raw CMS responses. Normalizers are total and
//! side-effect free: a malformed record yields defaults, never an
//! error.

pub mod about;
pub mod artist;
pub mod main_block;
pub mod project;

pub use about::{normalize_about, AboutImage, AboutPage};
pub use artist::{normalize_artist, Artist, ProfileImage, SocialMediaLink};
pub use main_block::{normalize_main_block, MainBlock};
pub use project::{normalize_project, Project};
