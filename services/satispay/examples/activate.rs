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

//! Exchange an activation token for a key id and save the authentication file.
//!
//! ```shell
//! SATISPAY_ENV=staging cargo run --example activate -- 623ECX
//! ```

use log::info;
use paysign_core::{Context, Error, OsEnv, Result};
use paysign_http_send_reqwest::ReqwestHttpSend;
use paysign_satispay::{activate, Config};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let token = std::env::args()
        .nth(1)
        .ok_or_else(|| Error::config_invalid("usage: activate <token>"))?;

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::from_env(&ctx)?;

    let auth = activate(&ctx, &config.authority(), &token).await?;
    info!("activated key {}", auth.key_id);

    let path = config
        .authentication_file
        .as_deref()
        .unwrap_or("~/.satispay/authentication.json");
    let path = ctx
        .expand_home_dir(path)
        .ok_or_else(|| Error::config_invalid("failed to expand home directory"))?;
    if let Some(dir) = Path::new(&path).parent() {
        tokio::fs::create_dir_all(dir).await?;
    }
    tokio::fs::write(&path, auth.to_json()?).await?;

    println!("key id: {}", auth.key_id);
    println!("authentication saved to {path}");
    Ok(())
}
