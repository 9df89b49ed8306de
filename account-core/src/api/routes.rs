//! Account API paths, relative to the configured base URL.

/// `PUT` with a [`ProfileUpdatePayload`](account_model::ProfileUpdatePayload) body.
pub const PROFILE: &str = "profile";

/// `POST` with a [`SignUpPayload`](account_model::SignUpPayload) body.
pub const USERS: &str = "users";

/// `PATCH` with a multipart body holding the avatar image.
pub const USER_AVATAR: &str = "users/avatar";
