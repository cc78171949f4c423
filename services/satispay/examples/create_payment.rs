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

//! Create a payment and read it back with a signed client.

use paysign_core::{Context, OsEnv, Result};
use paysign_file_read_tokio::TokioFileRead;
use paysign_http_send_reqwest::ReqwestHttpSend;
use paysign_satispay::{Body, Client, Config};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::from_env(&ctx)?;
    let client = Client::new(ctx, &config)?;

    let verification = client.test_authentication().await?;
    println!("signature check: {verification}");

    let body = Body::json(&json!({
        "flow": "MATCH_CODE",
        "amount_unit": 100,
        "currency": "EUR",
    }))?;
    let payment = client.create_payment(body).await?;
    println!("created: {payment}");

    if let Some(id) = payment["id"].as_str() {
        println!("fetched: {}", client.get_payment(id).await?);
    }
    Ok(())
}
