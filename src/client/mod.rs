pub mod error;
pub mod types;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::error;

use crate::executor::{
    CommandExecutor, CREATE_PROFILE, DELETE_PROFILE, GET_PROFILES, GET_PROFILE_BY_ID,
    GET_PROFILE_BY_USERNAME, UPDATE_PROFILE,
};
use crate::picture::PictureSource;

use self::error::{ClientError, CommandError};
use self::types::{
    CreateProfileArgs, CreateProfileRequest, Profile, ProfileId, ProfileIdArgs, ProfileParams,
    ProfileRecord, UpdateProfileArgs, UpdateProfileRequest, UsernameArgs,
};

#[derive(Debug, Clone)]
pub struct ProfileClient<E> {
    executor: E,
}

impl<E: CommandExecutor> ProfileClient<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub async fn get_profiles(&self) -> Result<Vec<Profile>, ClientError> {
        let value = self.invoke(GET_PROFILES, empty_args()).await?;
        let records: Vec<ProfileRecord> = decode(GET_PROFILES, value)?;
        Ok(records
            .into_iter()
            .map(ProfileRecord::into_display)
            .collect())
    }

    pub async fn get_profile(&self, id: ProfileId) -> Result<Profile, ClientError> {
        let value = self
            .invoke(GET_PROFILE_BY_ID, to_args(ProfileIdArgs { id }))
            .await?;
        let record: ProfileRecord = decode(GET_PROFILE_BY_ID, value)?;
        Ok(record.into_display())
    }

    pub async fn get_profile_by_username(&self, username: &str) -> Result<Profile, ClientError> {
        let value = self
            .invoke(GET_PROFILE_BY_USERNAME, to_args(UsernameArgs { username }))
            .await?;
        let record: ProfileRecord = decode(GET_PROFILE_BY_USERNAME, value)?;
        Ok(record.into_display())
    }

    pub async fn create_profile(
        &self,
        request: CreateProfileRequest,
    ) -> Result<Profile, ClientError> {
        let CreateProfileRequest {
            username,
            display_name,
            profile_picture,
        } = request;

        // The picture read completes before anything is transmitted.
        let profile = ProfileParams {
            username: Some(username),
            display_name: normalized(display_name),
            profile_picture_bytes: read_picture(profile_picture).await?,
        };

        let value = self
            .invoke(CREATE_PROFILE, to_args(CreateProfileArgs { profile }))
            .await?;
        let record: ProfileRecord = decode(CREATE_PROFILE, value)?;
        Ok(record.into_display())
    }

    pub async fn update_profile(
        &self,
        id: ProfileId,
        request: UpdateProfileRequest,
    ) -> Result<Profile, ClientError> {
        let UpdateProfileRequest {
            username,
            display_name,
            profile_picture,
        } = request;

        let profile = ProfileParams {
            username: normalized(username),
            display_name: normalized(display_name),
            profile_picture_bytes: read_picture(profile_picture).await?,
        };

        let value = self
            .invoke(UPDATE_PROFILE, to_args(UpdateProfileArgs { id, profile }))
            .await?;
        let record: ProfileRecord = decode(UPDATE_PROFILE, value)?;
        Ok(record.into_display())
    }

    pub async fn delete_profile(&self, id: ProfileId) -> Result<(), ClientError> {
        self.invoke(DELETE_PROFILE, to_args(ProfileIdArgs { id }))
            .await?;
        Ok(())
    }

    async fn invoke(&self, command: &'static str, args: Value) -> Result<Value, ClientError> {
        match self.executor.invoke(command, args).await {
            Ok(value) => Ok(value),
            Err(raw) => {
                let failure = CommandError::new(command, raw);
                error!(command, message = %failure.message(), "profile command failed");
                Err(ClientError::Command(failure))
            }
        }
    }
}

// Blank-after-trim optional fields go absent on the wire; anything else is
// transmitted as given, untrimmed.
fn normalized(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

async fn read_picture(source: Option<PictureSource>) -> Result<Option<Vec<u8>>, ClientError> {
    match source {
        Some(source) => Ok(Some(source.read_bytes().await?)),
        None => Ok(None),
    }
}

fn empty_args() -> Value {
    Value::Object(Map::new())
}

fn to_args(payload: impl Serialize) -> Value {
    serde_json::to_value(payload).expect("command args should serialize")
}

fn decode<T: DeserializeOwned>(command: &'static str, value: Value) -> Result<T, ClientError> {
    serde_json::from_value(value).map_err(|source| ClientError::Response { command, source })
}
