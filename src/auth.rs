//! Extraction of the API key from the `Authorization` header.
//!
//! The expected header shape is `Authorization: ApiKey <key>`.
//! Nothing in here logs or allocates beyond the returned key; callers decide how to
//! report an [`AuthError`].

use std::{collections::HashMap, hash::BuildHasher};

use http::{header::AUTHORIZATION, HeaderMap};
use serde::Serialize;

use crate::types::used_api_key::UsedApiKey;

/// The only accepted `Authorization` scheme. Compared case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
pub enum AuthError {
    /// The `Authorization` header is absent or empty.
    #[error("no authorization header included")]
    NoAuthHeader,
    /// The `Authorization` header does not read `ApiKey <key>`.
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// The first value of a header field as seen by a [`HeaderSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLookup<'a> {
    /// The value as a string.
    Text(&'a str),
    /// The value is present but is not a valid string (e.g. opaque bytes in a [`http::HeaderValue`]).
    Opaque,
}

/// Read access to a request's header fields.
///
/// Field names are matched ASCII case-insensitively. When a field carries multiple
/// values, only the first one is returned.
pub trait HeaderSource {
    fn first_value(&self, name: &str) -> Option<HeaderLookup<'_>>;
}

impl HeaderSource for HeaderMap {
    fn first_value(&self, name: &str) -> Option<HeaderLookup<'_>> {
        self.get(name).map(|value| match value.to_str() {
            Ok(value) => HeaderLookup::Text(value),
            Err(_) => HeaderLookup::Opaque,
        })
    }
}

impl<K, V, S> HeaderSource for HashMap<K, Vec<V>, S>
where
    K: AsRef<str>,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn first_value(&self, name: &str) -> Option<HeaderLookup<'_>> {
        // Keys differing only in case are possible here, pick the smallest one holding a
        // value so the result does not depend on the iteration order.
        self.iter()
            .filter_map(|(key, values)| values.first().map(|value| (key.as_ref(), value)))
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .min_by_key(|(key, _)| *key)
            .map(|(_, value)| HeaderLookup::Text(value.as_ref()))
    }
}

impl<K, V> HeaderSource for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn first_value(&self, name: &str) -> Option<HeaderLookup<'_>> {
        self.iter()
            .find(|(key, _)| key.as_ref().eq_ignore_ascii_case(name))
            .map(|(_, value)| HeaderLookup::Text(value.as_ref()))
    }
}

impl<K, V> HeaderSource for Vec<(K, V)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn first_value(&self, name: &str) -> Option<HeaderLookup<'_>> {
        self.as_slice().first_value(name)
    }
}

/// Returns the API key borrowed from the `Authorization` header.
pub fn api_key_str<H>(headers: &H) -> Result<&str, AuthError>
where
    H: HeaderSource + ?Sized,
{
    let authorization = match headers.first_value(AUTHORIZATION.as_str()) {
        None | Some(HeaderLookup::Text("")) => return Err(AuthError::NoAuthHeader),
        Some(HeaderLookup::Opaque) => return Err(AuthError::MalformedHeader),
        Some(HeaderLookup::Text(authorization)) => authorization,
    };

    match authorization.split_once(' ') {
        Some((API_KEY_SCHEME, key)) if is_token(key) => Ok(key),
        _ => Err(AuthError::MalformedHeader),
    }
}

/// Extracts the API key from the `Authorization` header.
///
/// The key is returned verbatim. Whether it identifies anyone is not checked here.
pub fn get_api_key<H>(headers: &H) -> Result<UsedApiKey, AuthError>
where
    H: HeaderSource + ?Sized,
{
    api_key_str(headers).map(|key| UsedApiKey {
        value: key.to_owned(),
    })
}

fn is_token(value: &str) -> bool {
    !value.is_empty() && !value.contains(char::is_whitespace)
}
