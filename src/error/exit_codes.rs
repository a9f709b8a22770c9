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

use crate::error::RankverError;

pub fn get_exit_code(error: &RankverError) -> i32 {
    if error.is_version_error() {
        return 2;
    }

    match error {
        RankverError::ConfigError(_) => 3,

        RankverError::Io(_) => 74, // EX_IOERR from sysexits.h

        _ => 1,
    }
}
