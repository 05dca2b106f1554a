//! Identity forwarded by the authentication gateway in front of this service.
//!
//! Sessions and TOTP verification live in the gateway. It strips these headers from
//! incoming requests and sets them for authenticated sessions only.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header::HeaderMap, FromRequest, HttpRequest};
use domain_order::model::vo::UserInfo;
use uuid::Uuid;

use super::ApiError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_NAME_HEADER: &str = "x-user-name";
pub const TOTP_VERIFIED_HEADER: &str = "x-totp-verified";

/// Authenticated user of the current request.
#[derive(Debug, Clone)]
pub struct Identity(pub UserInfo);

impl Identity {
    fn from_headers(headers: &HeaderMap) -> Result<Self, ApiError> {
        let header = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());

        let id = header(USER_ID_HEADER)
            .ok_or(ApiError::Unauthenticated("no user id"))?
            .parse::<Uuid>()
            .map_err(|_| ApiError::Unauthenticated("malformed user id"))?;
        let name = header(USER_NAME_HEADER).unwrap_or_default().to_owned();
        let totp_verified =
            header(TOTP_VERIFIED_HEADER).is_some_and(|value| value.eq_ignore_ascii_case("true"));

        Ok(Self(UserInfo {
            id,
            name,
            totp_verified,
        }))
    }
}

impl FromRequest for Identity {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_headers(req.headers()))
    }
}
