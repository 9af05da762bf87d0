use std::future::Future;

use serde_json::Value;

pub const GET_PROFILES: &str = "get_profiles";
pub const GET_PROFILE_BY_ID: &str = "get_profile_by_id";
pub const GET_PROFILE_BY_USERNAME: &str = "get_profile_by_username";
pub const CREATE_PROFILE: &str = "create_profile";
pub const UPDATE_PROFILE: &str = "update_profile";
pub const DELETE_PROFILE: &str = "delete_profile";

// Named-command seam to the backend. A rejected invocation carries whatever
// JSON value the backend failed with, unmodified.
pub trait CommandExecutor {
    fn invoke(
        &self,
        command: &str,
        args: Value,
    ) -> impl Future<Output = Result<Value, Value>> + Send;
}
