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

use paysign_core::utils::Redact;
use paysign_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that holds the key material used to sign GBusiness requests.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Key id issued by Satispay for the registered public key.
    pub key_id: String,
    /// PEM encoded private key, PKCS#8 (`BEGIN PRIVATE KEY`) or PKCS#1 (`BEGIN RSA PRIVATE KEY`).
    pub private_key: String,
    /// SPKI PEM encoded public key. Never used for signing.
    pub public_key: Option<String>,
}

impl Credential {
    /// Create a credential from key id and private key.
    pub fn new(key_id: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            private_key: private_key.into(),
            public_key: None,
        }
    }

    /// Attach the public key paired with the private key.
    pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = Some(public_key.into());
        self
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("key_id", &Redact::from(&self.key_id))
            .field("private_key", &Redact::from(&self.private_key))
            .field("public_key", &Redact::from(&self.public_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.key_id.is_empty() && !self.private_key.is_empty()
    }
}
