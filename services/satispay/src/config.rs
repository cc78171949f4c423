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

use crate::constants::*;
use paysign_core::utils::Redact;
use paysign_core::{Context, Error, Result};
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

/// Satispay environment a client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    /// `https://authservices.satispay.com`
    #[default]
    Production,
    /// `https://staging.authservices.satispay.com`, also known as sandbox.
    Staging,
}

impl Environment {
    /// Authority (scheme and host) of this environment.
    pub fn authority(&self) -> &'static str {
        match self {
            Environment::Production => SATISPAY_PRODUCTION_AUTHORITY,
            Environment::Staging => SATISPAY_STAGING_AUTHORITY,
        }
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "staging" | "sandbox" => Ok(Environment::Staging),
            v => Err(Error::config_invalid(format!(
                "unknown satispay environment: {v}"
            ))),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => f.write_str("production"),
            Environment::Staging => f.write_str("staging"),
        }
    }
}

/// Config for the Satispay GBusiness API.
///
/// Every field is optional. Values set here take precedence over the
/// environment when used through [`crate::ConfigCredentialProvider`].
#[derive(Clone, Default)]
pub struct Config {
    /// Environment to talk to, production when unset.
    pub environment: Option<Environment>,
    /// Explicit authority like `https://staging.authservices.satispay.com`, overrides `environment`.
    pub authority: Option<String>,
    /// Key id returned by the activation exchange.
    pub key_id: Option<String>,
    /// PKCS#8 PEM encoded private key.
    pub private_key: Option<String>,
    /// Path to a PEM file holding the private key.
    pub private_key_file: Option<String>,
    /// SPKI PEM encoded public key, only needed for activation bookkeeping.
    pub public_key: Option<String>,
    /// Path to the JSON authentication file written after activation.
    pub authentication_file: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("authority", &self.authority)
            .field("key_id", &Redact::from(&self.key_id))
            .field("private_key", &Redact::from(&self.private_key))
            .field("private_key_file", &self.private_key_file)
            .field("public_key", &Redact::from(&self.public_key))
            .field("authentication_file", &self.authentication_file)
            .finish()
    }
}

impl Config {
    /// Load config from environment variables.
    pub fn from_env(ctx: &Context) -> Result<Self> {
        let environment = ctx
            .env_var(SATISPAY_ENV)
            .map(|v| v.parse::<Environment>())
            .transpose()?;

        Ok(Self {
            environment,
            authority: ctx.env_var(SATISPAY_AUTHORITY),
            key_id: ctx.env_var(SATISPAY_KEY_ID),
            private_key: ctx.env_var(SATISPAY_PRIVATE_KEY),
            private_key_file: ctx.env_var(SATISPAY_PRIVATE_KEY_FILE),
            public_key: ctx.env_var(SATISPAY_PUBLIC_KEY),
            authentication_file: ctx.env_var(SATISPAY_AUTHENTICATION_FILE),
        })
    }

    /// Set the environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Set the key id and private key used for signing.
    pub fn with_key(mut self, key_id: impl Into<String>, private_key: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self.private_key = Some(private_key.into());
        self
    }

    /// Resolve the authority requests are sent to.
    ///
    /// An explicit `authority` wins over `environment`, production is the fallback.
    /// A trailing `/` is removed so paths can be appended directly.
    pub fn authority(&self) -> String {
        let authority = match &self.authority {
            Some(v) if !v.is_empty() => v.as_str(),
            _ => self.environment.unwrap_or_default().authority(),
        };
        authority.trim_end_matches('/').to_string()
    }
}
