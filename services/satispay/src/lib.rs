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

//! Satispay GBusiness API signer
//!
//! Requests are signed with an RSA-SHA256 HTTP `Signature` covering the
//! request target, host, body digest and date.
//!
//! ```no_run
//! use paysign_core::{Context, OsEnv};
//! use paysign_file_read_tokio::TokioFileRead;
//! use paysign_http_send_reqwest::ReqwestHttpSend;
//! use paysign_satispay::{Body, Client, Config};
//! use serde_json::json;
//!
//! # async fn example() -> paysign_core::Result<()> {
//! let ctx = Context::new()
//!     .with_file_read(TokioFileRead)
//!     .with_http_send(ReqwestHttpSend::default())
//!     .with_env(OsEnv);
//! let config = Config::from_env(&ctx)?;
//! let client = Client::new(ctx, &config)?;
//!
//! let body = Body::json(&json!({
//!     "flow": "MATCH_CODE",
//!     "amount_unit": 100,
//!     "currency": "EUR",
//! }))?;
//! let payment = client.create_payment(body).await?;
//! println!("payment: {payment}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod constants;

mod config;
pub use config::{Config, Environment};

mod credential;
pub use credential::Credential;

mod body;
pub use body::Body;

pub mod backend;
pub use backend::{default_backend, KeyPair, RsaBackend, SignatureBackend};

mod sign_request;
pub use sign_request::{body_digest, build_signed_headers, host, RequestSigner, StringToSign, DIGEST};

mod provide_credential;
pub use provide_credential::*;

mod authentication;
pub use authentication::{activate, activate_with_backend, Authentication};

mod client;
pub use client::Client;
