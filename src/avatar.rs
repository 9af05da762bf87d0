use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use url::Url;

pub const AVATAR_DATA_URI_PREFIX: &str = "data:image/webp;base64,";
pub const AVATAR_PLACEHOLDER_API: &str = "https://api.dicebear.com/9.x/thumbs/svg";

pub fn display_avatar(raw: Option<String>) -> Option<String> {
    raw.filter(|payload| !payload.is_empty())
        .map(|payload| format!("{AVATAR_DATA_URI_PREFIX}{payload}"))
}

pub fn data_uri_from_bytes(bytes: &[u8]) -> String {
    format!("{AVATAR_DATA_URI_PREFIX}{}", BASE64_STANDARD.encode(bytes))
}

pub fn placeholder_avatar_url(username: &str) -> String {
    let mut url = Url::parse(AVATAR_PLACEHOLDER_API).expect("placeholder api url should parse");
    url.query_pairs_mut().append_pair("seed", username);
    url.into()
}

pub fn avatar_or_placeholder(avatar: Option<&str>, username: &str) -> String {
    match avatar {
        Some(avatar) => avatar.to_string(),
        None => placeholder_avatar_url(username),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        avatar_or_placeholder, data_uri_from_bytes, display_avatar, placeholder_avatar_url,
    };

    #[test]
    fn display_avatar_frames_raw_payload() {
        assert_eq!(
            display_avatar(Some(String::from("Qw=="))),
            Some(String::from("data:image/webp;base64,Qw=="))
        );
    }

    #[test]
    fn display_avatar_drops_absent_and_empty_payloads() {
        assert_eq!(display_avatar(None), None);
        assert_eq!(display_avatar(Some(String::new())), None);
    }

    #[test]
    fn data_uri_from_bytes_uses_standard_alphabet() {
        assert_eq!(data_uri_from_bytes(b"C"), "data:image/webp;base64,Qw==");
    }

    #[test]
    fn placeholder_url_encodes_the_seed() {
        assert_eq!(
            placeholder_avatar_url("ann"),
            "https://api.dicebear.com/9.x/thumbs/svg?seed=ann"
        );
        assert_eq!(
            placeholder_avatar_url("a&b"),
            "https://api.dicebear.com/9.x/thumbs/svg?seed=a%26b"
        );
    }

    #[test]
    fn avatar_or_placeholder_prefers_the_avatar() {
        assert_eq!(avatar_or_placeholder(Some("data:x"), "ann"), "data:x");
        assert_eq!(
            avatar_or_placeholder(None, "ann"),
            "https://api.dicebear.com/9.x/thumbs/svg?seed=ann"
        );
    }
}
