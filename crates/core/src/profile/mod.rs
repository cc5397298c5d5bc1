//! Profile module - per-user settings such as monthly income.

mod profile_model;
mod profile_service;
mod profile_traits;


pub use profile_model::UserProfile;
pub use profile_service::ProfileService;
pub use profile_traits::{ProfileCallback, ProfileServiceTrait};
