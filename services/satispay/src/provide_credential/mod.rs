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

mod config;
pub use config::ConfigCredentialProvider;

mod env;
pub use env::EnvCredentialProvider;

mod file;
pub use file::FileCredentialProvider;

mod static_;
pub use static_::StaticCredentialProvider;

mod default;
pub use default::DefaultCredentialProvider;

use log::debug;
use paysign_core::{Context, Error, Result};

/// Resolve the private key from inline PEM content or from a key file.
///
/// Inline content wins. A configured but unreadable key file is an error.
async fn load_private_key(
    ctx: &Context,
    private_key: Option<&str>,
    private_key_file: Option<&str>,
) -> Result<Option<String>> {
    if let Some(key) = private_key.filter(|v| !v.is_empty()) {
        return Ok(Some(key.to_string()));
    }
    let Some(path) = private_key_file.filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    let path = ctx
        .expand_home_dir(path)
        .ok_or_else(|| Error::config_invalid("failed to expand home directory"))?;
    debug!("loading private key from {path}");
    let content = ctx.file_read_as_string(&path).await.map_err(|e| {
        Error::config_invalid(format!("failed to read private key file {path}")).with_source(e)
    })?;
    Ok(Some(content))
}
