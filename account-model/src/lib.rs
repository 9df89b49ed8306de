//! Core data model definitions shared across the account crates.
#![allow(missing_docs)]

pub mod avatar;
pub mod forms;
pub mod ids;
pub mod payload;
pub mod prelude;
pub mod secret;
pub mod user;

// Intentionally curated re-exports for downstream consumers.
pub use avatar::{AVATAR_CONTENT_TYPE, AVATAR_FIELD, AvatarSelection, AvatarUpload};
pub use forms::{ProfileUpdateInput, SignUpInput};
pub use ids::UserId;
pub use payload::{PasswordChange, ProfileUpdatePayload, SignUpPayload};
pub use secret::Secret;
pub use user::User;
