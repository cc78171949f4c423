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

/// Authority of the production environment.
pub(crate) const SATISPAY_PRODUCTION_AUTHORITY: &str = "https://authservices.satispay.com";
/// Authority of the staging (sandbox) environment.
pub(crate) const SATISPAY_STAGING_AUTHORITY: &str = "https://staging.authservices.satispay.com";

/// Default location of the authentication file written after activation.
pub(crate) const SATISPAY_AUTHENTICATION_PATH: &str = "~/.satispay/authentication.json";

// Environment variables
pub(crate) const SATISPAY_ENV: &str = "SATISPAY_ENV";
pub(crate) const SATISPAY_AUTHORITY: &str = "SATISPAY_AUTHORITY";
pub(crate) const SATISPAY_KEY_ID: &str = "SATISPAY_KEY_ID";
pub(crate) const SATISPAY_PRIVATE_KEY: &str = "SATISPAY_PRIVATE_KEY";
pub(crate) const SATISPAY_PRIVATE_KEY_FILE: &str = "SATISPAY_PRIVATE_KEY_FILE";
pub(crate) const SATISPAY_PUBLIC_KEY: &str = "SATISPAY_PUBLIC_KEY";
pub(crate) const SATISPAY_AUTHENTICATION_FILE: &str = "SATISPAY_AUTHENTICATION_FILE";

// Signature scheme
pub(crate) const SIGNATURE_SCHEME: &str = "Signature";
pub(crate) const SIGNATURE_ALGORITHM: &str = "rsa-sha256";
pub(crate) const DIGEST_PREFIX: &str = "SHA-256=";
pub(crate) const CONTENT_TYPE_JSON: &str = "application/json";
pub(crate) const RSA_KEY_BITS: usize = 2048;

// API paths
pub(crate) const AUTHENTICATION_KEYS_PATH: &str = "/g_business/v1/authentication_keys";
pub(crate) const SIGNATURE_TEST_PATH: &str = "/wally-services/protocol/tests/signature";
pub(crate) const PAYMENTS_PATH: &str = "/g_business/v1/payments";
pub(crate) const CONSUMERS_PATH: &str = "/g_business/v1/consumers";
