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

//! Utility functions and types.

use std::fmt::Debug;

/// Redacts sensitive strings like key ids and private keys in `Debug` output.
///
/// - Empty input is printed as `EMPTY`.
/// - PEM encoded input only reveals its label, e.g. `PEM(PRIVATE KEY)`.
/// - Input with fewer than 12 characters is entirely redacted.
/// - Otherwise only the first three and the last three characters are kept.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        match value {
            None => Redact(""),
            Some(v) => Redact(v),
        }
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.0.trim();
        let length = value.len();

        if length == 0 {
            return f.write_str("EMPTY");
        }
        if let Some(label) = pem_label(value) {
            return write!(f, "PEM({label})");
        }
        if length < 12 || !value.is_char_boundary(3) || !value.is_char_boundary(length - 3) {
            f.write_str("***")
        } else {
            f.write_str(&value[..3])?;
            f.write_str("***")?;
            f.write_str(&value[length - 3..])
        }
    }
}

fn pem_label(value: &str) -> Option<&str> {
    value
        .strip_prefix("-----BEGIN ")?
        .split_once("-----")
        .map(|(label, _)| label)
}
