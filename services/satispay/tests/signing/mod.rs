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

mod standard;

use anyhow::{anyhow, Result};
use chrono::TimeZone;
use http::header::{AUTHORIZATION, DATE};
use http::{HeaderMap, Method};
use paysign_core::hash::base64_decode;
use paysign_core::time::DateTime;
use paysign_satispay::{StringToSign, DIGEST};
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::pkcs8::DecodePublicKey;
use rsa::sha2::Sha256;
use rsa::signature::Verifier;
use rsa::RsaPublicKey;

use crate::PUBLIC_KEY;

pub fn test_time() -> DateTime {
    chrono::Utc
        .with_ymd_and_hms(2024, 1, 15, 10, 30, 0)
        .single()
        .expect("valid date")
}

/// Extract the `signature="..."` parameter of an Authorization header.
pub fn signature_param(headers: &HeaderMap) -> Result<String> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| anyhow!("authorization header missing"))?
        .to_str()?;
    let (_, rest) = value
        .split_once("signature=\"")
        .ok_or_else(|| anyhow!("signature param missing in {value}"))?;
    Ok(rest.trim_end_matches('"').to_string())
}

/// Rebuild the canonical string from the sent headers and check it against the public key.
pub fn verify_signed_headers(
    headers: &HeaderMap,
    method: &Method,
    target: &str,
    host: &str,
    body: &[u8],
) -> Result<()> {
    let string_to_sign = StringToSign::new(
        method,
        target,
        host,
        body,
        headers[&DIGEST].to_str()?,
        headers[DATE].to_str()?,
    );
    let signature = base64_decode(&signature_param(headers)?)?;

    let key = VerifyingKey::<Sha256>::new(RsaPublicKey::from_public_key_pem(PUBLIC_KEY)?);
    key.verify(
        string_to_sign.build().as_bytes(),
        &Signature::try_from(signature.as_slice())?,
    )?;
    Ok(())
}
