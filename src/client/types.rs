use serde::{Deserialize, Serialize};

use crate::avatar::display_avatar;
use crate::picture::PictureSource;

pub const MAX_USERNAME_LENGTH: usize = 16;
pub const MAX_DISPLAY_NAME_LENGTH: usize = 32;

pub type ProfileId = i32;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

// Profile exactly as the backend returns it: `avatar` is a bare base64
// payload, not yet framed for display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: ProfileId,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl ProfileRecord {
    pub fn into_display(self) -> Profile {
        Profile {
            id: self.id,
            username: self.username,
            display_name: self.display_name,
            avatar: display_avatar(self.avatar),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProfileRequest {
    pub username: String,
    pub display_name: Option<String>,
    pub profile_picture: Option<PictureSource>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub profile_picture: Option<PictureSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_bytes: Option<Vec<u8>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateProfileArgs {
    pub profile: ProfileParams,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateProfileArgs {
    pub id: ProfileId,
    pub profile: ProfileParams,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProfileIdArgs {
    pub id: ProfileId,
}

#[derive(Debug, Serialize)]
pub(crate) struct UsernameArgs<'a> {
    pub username: &'a str,
}

#[cfg(test)]
mod tests {
    use super::ProfileRecord;

    #[test]
    fn into_display_frames_the_avatar_once() {
        let record = ProfileRecord {
            id: 1,
            username: String::from("ann"),
            display_name: Some(String::from("Ann")),
            avatar: Some(String::from("Qw==")),
        };

        let profile = record.into_display();
        assert_eq!(
            profile.avatar.as_deref(),
            Some("data:image/webp;base64,Qw==")
        );
        assert_eq!(profile.display_name.as_deref(), Some("Ann"));
    }

    #[test]
    fn into_display_keeps_missing_avatars_missing() {
        let record = ProfileRecord {
            id: 2,
            username: String::from("ben"),
            display_name: None,
            avatar: None,
        };

        assert_eq!(record.into_display().avatar, None);
    }
}
