// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Key activation.
//!
//! A merchant activation token is exchanged for a key id by uploading a
//! freshly generated public key. The result is kept as an [`Authentication`]
//! and usually saved as the JSON authentication file.

use crate::backend::{default_backend, SignatureBackend};
use crate::constants::{AUTHENTICATION_KEYS_PATH, CONTENT_TYPE_JSON};
use crate::{Body, Credential};
use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{Method, Request, StatusCode};
use log::debug;
use paysign_core::utils::Redact;
use paysign_core::{Context, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

/// Key material obtained by activating a token.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authentication {
    /// Key id assigned by Satispay.
    pub key_id: String,
    /// PKCS#8 PEM encoded private key.
    pub private_key: String,
    /// SPKI PEM encoded public key that was registered.
    #[serde(default)]
    pub public_key: String,
}

impl Debug for Authentication {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authentication")
            .field("key_id", &Redact::from(&self.key_id))
            .field("private_key", &Redact::from(&self.private_key))
            .field("public_key", &Redact::from(&self.public_key))
            .finish()
    }
}

impl Authentication {
    /// Serialize as the content of an authentication file.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<Authentication> for Credential {
    fn from(auth: Authentication) -> Self {
        let credential = Credential::new(auth.key_id, auth.private_key);
        if auth.public_key.is_empty() {
            credential
        } else {
            credential.with_public_key(auth.public_key)
        }
    }
}

#[derive(Serialize)]
struct ActivationRequest<'a> {
    public_key: &'a str,
    token: &'a str,
}

#[derive(Deserialize)]
struct ActivationResponse {
    key_id: String,
}

/// Activate `token` against `authority` with the process wide backend.
pub async fn activate(ctx: &Context, authority: &str, token: &str) -> Result<Authentication> {
    let backend = default_backend()?;
    activate_with_backend(ctx, backend.as_ref(), authority, token).await
}

/// Activate `token` against `authority`, generating the key pair with `backend`.
///
/// The request is sent unsigned since no key id exists yet.
pub async fn activate_with_backend(
    ctx: &Context,
    backend: &dyn SignatureBackend,
    authority: &str,
    token: &str,
) -> Result<Authentication> {
    if token.trim().is_empty() {
        return Err(Error::request_invalid("activation token is empty"));
    }

    let pair = backend.generate_key_pair()?;
    let body = Body::json(&ActivationRequest {
        public_key: &pair.public_key,
        token,
    })?;

    let url = format!(
        "{}{AUTHENTICATION_KEYS_PATH}",
        authority.trim_end_matches('/')
    );
    debug!("activating token against {url}");
    let req = Request::builder()
        .method(Method::POST)
        .uri(url)
        .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
        .header(CONTENT_LENGTH, body.len())
        .body(Bytes::from(body))?;

    let resp = ctx.http_send(req).await?;
    let status = resp.status();
    if !status.is_success() {
        let content = String::from_utf8_lossy(resp.body());
        return Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
                Error::credential_invalid(format!(
                    "activation token rejected with {status}: {content}"
                ))
            }
            _ => Error::api(format!("activation failed with {status}: {content}")),
        });
    }

    let resp: ActivationResponse = serde_json::from_slice(resp.body()).map_err(|e| {
        Error::api("failed to parse activation response").with_source(e)
    })?;
    debug!("token activated");

    Ok(Authentication {
        key_id: resp.key_id,
        private_key: pair.private_key,
        public_key: pair.public_key,
    })
}
