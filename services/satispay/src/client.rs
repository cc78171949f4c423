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

use crate::constants::{CONSUMERS_PATH, CONTENT_TYPE_JSON, PAYMENTS_PATH, SIGNATURE_TEST_PATH};
use crate::{Body, Config, Credential, DefaultCredentialProvider, RequestSigner};
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{Method, Request};
use log::debug;
use paysign_core::{Context, Error, Result, Signer};
use serde_json::{json, Value};

/// Client sends signed requests to the Satispay GBusiness API.
///
/// Bodies are passed as [`Body`], serialized once by the caller. The exact
/// same bytes are digested, counted and sent.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    authority: String,
    signer: Signer<Credential>,
}

impl Client {
    /// Create a client that loads its credential through [`DefaultCredentialProvider`].
    ///
    /// Fails if no signature backend is available.
    pub fn new(ctx: Context, config: &Config) -> Result<Self> {
        let signer = Signer::new(
            ctx.clone(),
            DefaultCredentialProvider::new(config.clone()),
            RequestSigner::new()?,
        );
        Ok(Self {
            ctx,
            authority: config.authority(),
            signer,
        })
    }

    /// Replace the signer, for example to use a static credential.
    pub fn with_signer(mut self, signer: Signer<Credential>) -> Self {
        self.signer = signer;
        self
    }

    /// Authority requests are sent to.
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Sign and send one request.
    ///
    /// `path` is the request target, query string included, exactly as it
    /// should be signed. Non 2xx responses are returned as [`ErrorKind::Api`](paysign_core::ErrorKind::Api).
    pub async fn send(&self, method: Method, path: &str, body: Option<Body>) -> Result<Value> {
        let body = body.unwrap_or_default();
        let mut builder = Request::builder()
            .method(method)
            .uri(format!("{}{path}", self.authority));
        if !body.is_empty() {
            builder = builder.header(CONTENT_TYPE, CONTENT_TYPE_JSON);
        }
        let (mut parts, _) = builder.body(())?.into_parts();

        self.signer.sign(&mut parts, body.as_bytes()).await?;

        let req = Request::from_parts(parts, Bytes::from(body));
        debug!("sending {} {}", req.method(), req.uri());
        let resp = self.ctx.http_send(req).await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::api(format!(
                "request failed with {status}: {}",
                String::from_utf8_lossy(resp.body())
            )));
        }
        if resp.body().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(resp.body())
            .map_err(|e| Error::api("failed to parse response").with_source(e))
    }

    /// Ask the server to verify the signature of a test request.
    pub async fn test_authentication(&self) -> Result<Value> {
        let body = Body::json(&json!({
            "flow": "MATCH_CODE",
            "amount_unit": 100,
            "currency": "EUR",
        }))?;
        self.send(Method::POST, SIGNATURE_TEST_PATH, Some(body))
            .await
    }

    /// Create a payment.
    pub async fn create_payment(&self, body: Body) -> Result<Value> {
        self.send(Method::POST, PAYMENTS_PATH, Some(body)).await
    }

    /// Get a payment by id.
    pub async fn get_payment(&self, id: &str) -> Result<Value> {
        self.send(Method::GET, &format!("{PAYMENTS_PATH}/{id}"), None)
            .await
    }

    /// Update a payment, for example to accept or cancel it.
    pub async fn update_payment(&self, id: &str, body: Body) -> Result<Value> {
        self.send(Method::PUT, &format!("{PAYMENTS_PATH}/{id}"), Some(body))
            .await
    }

    /// List payments. `query` is appended verbatim and covered by the signature.
    pub async fn list_payments(&self, query: Option<&str>) -> Result<Value> {
        let path = match query.filter(|q| !q.is_empty()) {
            Some(q) => format!("{PAYMENTS_PATH}?{}", q.trim_start_matches('?')),
            None => PAYMENTS_PATH.to_string(),
        };
        self.send(Method::GET, &path, None).await
    }

    /// Get a consumer by phone number.
    pub async fn get_consumer(&self, phone_number: &str) -> Result<Value> {
        self.send(Method::GET, &format!("{CONSUMERS_PATH}/{phone_number}"), None)
            .await
    }
}
