use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use crate::domain::user::models::TokenIdentity;

/// Echo the identity carried by the caller's bearer token.
pub async fn introspect(
    Extension(identity): Extension<TokenIdentity>,
) -> ApiSuccess<IntrospectResponseData> {
    ApiSuccess::new(StatusCode::OK, (&identity).into())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectResponseData {
    pub user_id: String,
    pub role: String,
}

impl From<&TokenIdentity> for IntrospectResponseData {
    fn from(identity: &TokenIdentity) -> Self {
        Self {
            user_id: identity.user_id.to_string(),
            role: identity.role.as_str().to_string(),
        }
    }
}
