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

use crate::backend::{default_backend, SignatureBackend};
use crate::constants::*;
use crate::Credential;
use async_trait::async_trait;
use http::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, DATE};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use log::{debug, warn};
use paysign_core::hash::{base64_encode, base64_sha256};
use paysign_core::time::{format_http_date, now, DateTime};
use paysign_core::{Context, Result, SignRequest, SigningCredential, SigningRequest};
use std::fmt::Write;
use std::sync::Arc;

/// `Digest` header, not part of the `http` well known headers.
pub static DIGEST: HeaderName = HeaderName::from_static("digest");

/// RequestSigner that implements Satispay GBusiness request signing.
///
/// The request is signed with the `Signature` scheme over
/// `(request-target) host [content-type content-length] digest date`.
#[derive(Debug)]
pub struct RequestSigner {
    backend: Arc<dyn SignatureBackend>,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new request signer on top of the process wide backend.
    ///
    /// Fails right away if no signature backend is available.
    pub fn new() -> Result<Self> {
        Ok(Self::with_backend(default_backend()?))
    }

    /// Create a new request signer with an explicit backend.
    pub fn with_backend(backend: Arc<dyn SignatureBackend>) -> Self {
        Self {
            backend,
            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut http::request::Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential.filter(|cred| cred.is_valid()) else {
            debug!("no usable credential, leaving request unsigned");
            return Ok(());
        };

        let mut signing_req = SigningRequest::build(req)?;
        let signed = build_signed_headers(
            self.backend.as_ref(),
            &signing_req.method,
            &signing_req.request_target(),
            body,
            signing_req.authority.as_str(),
            Some(cred),
            self.time.unwrap_or_else(now),
        );
        let signed = match signed {
            Ok(headers) => headers,
            Err(err) => {
                // Hand the untouched request back, the caller must not send it.
                if let Err(e) = signing_req.apply(req) {
                    warn!("failed to restore request after signing error: {e}");
                }
                return Err(err);
            }
        };

        // Keep the wire headers in line with what the signature covers.
        if !body.is_empty() {
            signing_req.header_insert(CONTENT_TYPE, CONTENT_TYPE_JSON)?;
            signing_req.header_insert(CONTENT_LENGTH, &body.len().to_string())?;
        }
        for (name, value) in signed.iter() {
            signing_req.headers.insert(name.clone(), value.clone());
        }

        signing_req.apply(req)
    }
}

/// Build the `Date`, `Digest` and `Authorization` headers for one request.
///
/// - `path` is the request target as sent, query string included.
/// - `body` is the serialized payload, empty for requests without body.
/// - `authority` may carry a scheme, it is stripped before signing.
///
/// Returns an empty map when `credential` is missing or lacks a key id or a
/// private key. Any signing failure is returned as an error and no header is
/// produced.
pub fn build_signed_headers(
    backend: &dyn SignatureBackend,
    method: &Method,
    path: &str,
    body: &[u8],
    authority: &str,
    credential: Option<&Credential>,
    now: DateTime,
) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    // Read the key material exactly once for the whole signature.
    let Some(cred) = credential.filter(|cred| cred.is_valid()).cloned() else {
        return Ok(headers);
    };

    let date = format_http_date(now);
    let digest = body_digest(body);
    let string_to_sign = StringToSign::new(method, path, host(authority), body, &digest, &date);

    let canonical = string_to_sign.build();
    debug!("string to sign: {}", &canonical);

    let signature = backend.sign(&cred.private_key, canonical.as_bytes())?;
    let authorization = authorization(
        &cred.key_id,
        &string_to_sign.signed_headers(),
        &base64_encode(&signature),
    )?;

    headers.insert(DATE, HeaderValue::from_str(&date)?);
    headers.insert(DIGEST.clone(), HeaderValue::from_str(&digest)?);
    let mut value = HeaderValue::from_str(&authorization)?;
    value.set_sensitive(true);
    headers.insert(AUTHORIZATION, value);

    Ok(headers)
}

/// `SHA-256=<base64 sha256 of body>`, also computed for an empty body.
pub fn body_digest(body: &[u8]) -> String {
    format!("{DIGEST_PREFIX}{}", base64_sha256(body))
}

/// Strip the scheme from an authority like `https://authservices.satispay.com`.
///
/// Ports and paths are kept as is.
pub fn host(authority: &str) -> &str {
    authority
        .strip_prefix("https://")
        .or_else(|| authority.strip_prefix("http://"))
        .unwrap_or(authority)
}

fn authorization(key_id: &str, signed_headers: &str, signature: &str) -> Result<String> {
    let mut f = String::new();
    write!(f, "{SIGNATURE_SCHEME} ")?;
    write!(f, "keyId=\"{key_id}\", ")?;
    write!(f, "algorithm=\"{SIGNATURE_ALGORITHM}\", ")?;
    write!(f, "headers=\"{signed_headers}\", ")?;
    write!(f, "signature=\"{signature}\"")?;
    Ok(f)
}

/// Ordered pseudo headers covered by the signature.
///
/// The same list produces both the canonical string and the `headers=`
/// parameter, so they can not drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringToSign {
    components: Vec<(&'static str, String)>,
}

impl StringToSign {
    /// Collect the components for one request.
    pub fn new(
        method: &Method,
        path: &str,
        host: &str,
        body: &[u8],
        digest: &str,
        date: &str,
    ) -> Self {
        let mut components = vec![
            (
                "(request-target)",
                format!("{} {}", method.as_str().to_lowercase(), path),
            ),
            ("host", host.to_string()),
        ];
        if !body.is_empty() {
            components.push(("content-type", CONTENT_TYPE_JSON.to_string()));
            components.push(("content-length", body.len().to_string()));
        }
        components.push(("digest", digest.to_string()));
        components.push(("date", date.to_string()));

        Self { components }
    }

    /// Newline joined `name: value` lines, without trailing newline.
    pub fn build(&self) -> String {
        self.components
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Space joined names in signing order.
    pub fn signed_headers(&self) -> String {
        self.components
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
