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
use crate::{Config, Credential};
use async_trait::async_trait;
use log::debug;
use paysign_core::{Context, ProvideCredential, Result};

/// ConfigCredentialProvider builds the credential from an explicit [`Config`].
///
/// Needs `key_id` and either `private_key` or `private_key_file`.
#[derive(Debug, Clone)]
pub struct ConfigCredentialProvider {
    config: Config,
}

impl ConfigCredentialProvider {
    /// Create a new ConfigCredentialProvider.
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let Some(key_id) = self.config.key_id.as_deref().filter(|v| !v.is_empty()) else {
            return Ok(None);
        };
        let private_key = load_private_key(
            ctx,
            self.config.private_key.as_deref(),
            self.config.private_key_file.as_deref(),
        )
        .await?;
        let Some(private_key) = private_key else {
            debug!("config has a key id but no private key, skipping");
            return Ok(None);
        };

        Ok(Some(Credential {
            key_id: key_id.to_string(),
            private_key,
            public_key: self.config.public_key.clone(),
        }))
    }
}
