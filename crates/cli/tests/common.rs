// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tokio::runtime::Runtime;
use wiremock::MockServer;

pub use predicates::prelude::*;
pub use serde_json::json;
pub use tempfile::TempDir;
pub use wiremock::matchers::{body_json, method, path};
pub use wiremock::{Mock, ResponseTemplate};

/// A wiremock store service kept alive on its own runtime while the
/// binary under test talks to it.
pub struct StoreService {
    server: MockServer,
    runtime: Runtime,
    config_dir: TempDir,
}

impl StoreService {
    pub fn start() -> Self {
        let runtime = Runtime::new().unwrap();
        let server = runtime.block_on(MockServer::start());
        let config_dir = TempDir::new().unwrap();
        std::fs::write(config_dir.path().join("config.toml"), "").unwrap();
        StoreService {
            server,
            runtime,
            config_dir,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    /// Verify `expect(..)` counts on mounted mocks.
    pub fn verify(&self) {
        self.runtime.block_on(self.server.verify());
    }

    /// The binary pointed at this service, isolated from user config.
    pub fn storedeck(&self) -> Command {
        let mut cmd = storedeck();
        cmd.arg("--api-url")
            .arg(self.uri())
            .arg("--config")
            .arg(self.config_dir.path().join("config.toml"));
        cmd
    }
}

pub fn storedeck() -> Command {
    let mut cmd = cargo_bin_cmd!("storedeck");
    cmd.env_remove("STOREDECK_API_BASE_URL")
        .env_remove("STOREDECK_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

pub fn store_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "engine": "woocommerce",
        "display_name": null,
        "namespace": format!("store-{}", id),
        "release_name": format!("store-{}", id),
        "status": status,
        "url": if status == "READY" { json!(format!("http://{}.127.0.0.1.nip.io", id)) } else { json!(null) },
        "last_error": null,
        "created_at": "2026-02-12T10:00:00+00:00",
        "updated_at": "2026-02-12T10:00:00+00:00"
    })
}
