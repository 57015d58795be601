use derive_new::new;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::Profile;

#[derive(
    Deserialize, Serialize, new, ToSchema, Debug, PartialEq, Eq, Hash,
)]
pub struct Message {
    #[new(into)]
    pub message: String,
}

#[derive(
    Deserialize, Serialize, new, ToSchema, Debug, PartialEq, Eq, Hash,
)]
pub struct TokenData {
    #[new(into)]
    pub message: String,
    pub token: String,
}

#[derive(
    Deserialize, Serialize, new, ToSchema, Debug, PartialEq, Eq, Hash,
)]
pub struct ProfileData {
    #[new(into)]
    pub message: String,
    pub profile: Profile,
}
