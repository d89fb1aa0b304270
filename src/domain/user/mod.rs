// src/domain/user/mod.rs
pub mod entity;
pub mod profile;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, PersonalDetails, User};
pub use profile::{ProfileDetails, ProfileListing, UserProfile};
pub use repository::{ProfileRepository, UserRepository};
pub use value_objects::{Capability, EmailAddress, PasswordHash, Role, UserId, Username};
