// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use assert_cmd::Command;
use tempfile::TempDir;

/// A `rankver` command isolated from the user's configuration and
/// environment overrides.
pub struct TestHome {
    dir: TempDir,
}

#[allow(dead_code)]
impl TestHome {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join("config.toml"), contents)
            .expect("Failed to write config.toml");
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("rankver").unwrap();
        cmd.env("RANKVER_HOME", self.dir.path())
            .env_remove("RANKVER_SORT__REVERSE")
            .env_remove("RANKVER_SORT__UNIQUE")
            .env_remove("RANKVER_OUTPUT__COLOR")
            .env_remove("RUST_LOG");
        cmd
    }
}
