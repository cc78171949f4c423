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

use super::load_private_key;
use crate::constants::*;
use crate::Credential;
use async_trait::async_trait;
use log::debug;
use paysign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads Satispay credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `SATISPAY_KEY_ID`: The key id returned by the activation exchange
/// - `SATISPAY_PRIVATE_KEY`: The PEM encoded private key
/// - `SATISPAY_PRIVATE_KEY_FILE`: The path to the private key, used when `SATISPAY_PRIVATE_KEY` is unset
/// - `SATISPAY_PUBLIC_KEY`: The PEM encoded public key (optional)
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider {}

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        let Some(key_id) = envs.get(SATISPAY_KEY_ID).filter(|v| !v.is_empty()) else {
            return Ok(None);
        };
        let private_key = load_private_key(
            ctx,
            envs.get(SATISPAY_PRIVATE_KEY).map(String::as_str),
            envs.get(SATISPAY_PRIVATE_KEY_FILE).map(String::as_str),
        )
        .await?;
        let Some(private_key) = private_key else {
            debug!("{SATISPAY_KEY_ID} is set but no private key found in env");
            return Ok(None);
        };

        debug!("loading credential from environment variables");
        Ok(Some(Credential {
            key_id: key_id.clone(),
            private_key,
            public_key: envs.get(SATISPAY_PUBLIC_KEY).cloned(),
        }))
    }
}
