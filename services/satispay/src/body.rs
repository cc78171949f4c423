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

use bytes::Bytes;
use paysign_core::Result;
use serde::Serialize;

/// An already serialized JSON request body.
///
/// The body is serialized exactly once. The same bytes feed the `Digest`,
/// the `content-length` covered by the signature and the payload on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body(String);

impl Body {
    /// Serialize `value` as JSON.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self(serde_json::to_string(value)?))
    }

    /// Wrap a JSON string that was serialized elsewhere.
    pub fn from_serialized(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The serialized JSON.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Raw bytes as signed and sent.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in bytes, not in characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the body is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Body> for Bytes {
    fn from(body: Body) -> Self {
        Bytes::from(body.0)
    }
}
