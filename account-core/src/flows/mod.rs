//! Submit flows: one call per submit gesture, validate then send then
//! update the session.
//!
//! Each flow issues at most one request and holds no lock while it is in
//! flight. Re-submission while a request is pending is not debounced here.

mod avatar;
mod profile;
mod sign_up;

pub use avatar::AvatarFlow;
pub use profile::ProfileFlow;
pub use sign_up::SignUpFlow;
