//! UI focused snapshot of the model surface.
//! Prefer importing from this module when wiring screens to the flows in
//! `account-core`.

pub use super::avatar::{AvatarSelection, AvatarUpload};
pub use super::forms::{ProfileUpdateInput, SignUpInput};
pub use super::ids::UserId;
pub use super::payload::{PasswordChange, ProfileUpdatePayload, SignUpPayload};
pub use super::secret::Secret;
pub use super::user::User;
