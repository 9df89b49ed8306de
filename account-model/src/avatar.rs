use crate::ids::UserId;

/// Content type sent with every avatar upload.
pub const AVATAR_CONTENT_TYPE: &str = "image/jpeg";

/// Multipart form field the server reads the avatar from.
pub const AVATAR_FIELD: &str = "avatar";

/// Outcome of the platform image picker, handed to the avatar flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarSelection {
    /// The user dismissed the picker.
    Cancelled,
    /// The picker reported an error.
    Failed(String),
    /// JPEG bytes of the chosen image.
    Picked(Vec<u8>),
}

/// A picked image, named after its owner and ready to upload.
#[derive(Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl AvatarUpload {
    pub fn for_user(user_id: &UserId, bytes: Vec<u8>) -> Self {
        Self {
            file_name: format!("{user_id}.jpg"),
            content_type: AVATAR_CONTENT_TYPE,
            bytes,
        }
    }
}

impl std::fmt::Debug for AvatarUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvatarUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_is_named_after_the_user() {
        let id: UserId = "0190b6a2-3c4d-7e8f-9a0b-1c2d3e4f5a6b".parse().unwrap();
        let upload = AvatarUpload::for_user(&id, vec![0xff, 0xd8, 0xff]);
        assert_eq!(upload.file_name, "0190b6a2-3c4d-7e8f-9a0b-1c2d3e4f5a6b.jpg");
        assert_eq!(upload.content_type, "image/jpeg");
        assert!(format!("{upload:?}").contains("bytes: 3"));
    }
}
