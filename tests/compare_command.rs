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

mod common;

use common::TestHome;
use predicates::prelude::*;

#[test]
fn test_compare_prints_relation() {
    let home = TestHome::new();
    home.command()
        .args(["compare", "1.0.0-rc.1", "1.0.0"])
        .assert()
        .success()
        .stdout("1.0.0-rc.1 < 1.0.0\n");

    home.command()
        .args(["compare", "1.0", "1.0.0"])
        .assert()
        .success()
        .stdout("1.0 = 1.0.0\n");

    home.command()
        .args(["cmp", "1.0.10-alpha.beta", "1.0.1b"])
        .assert()
        .success()
        .stdout("1.0.10-alpha.beta > 1.0.1b\n");
}

#[test]
fn test_compare_timestamp_sized_ranks() {
    let home = TestHome::new();
    home.command()
        .args(["compare", "1.202401011200000000001a", "1.202401011200000000001"])
        .assert()
        .success()
        .stdout("1.202401011200000000001a < 1.202401011200000000001\n");

    home.command()
        .args(["check", "1.202401011200000000000", "lt", "1.202401011200000000001"])
        .assert()
        .code(0);
}

#[test]
fn test_compare_json() {
    let home = TestHome::new();
    let output = home
        .command()
        .args(["compare", "--json", "1.1.0-alpha", "1.2.0-alpha.1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["left"], "1.1.0-alpha");
    assert_eq!(value["right"], "1.2.0-alpha.1");
    assert_eq!(value["ordering"], "less");
}

#[test]
fn test_compare_unrecognized_maturity() {
    let home = TestHome::new();
    home.command()
        .args(["compare", "1.0.0-foo", "1.0.0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unrecognized maturity marker 'foo'"))
        .stderr(predicate::str::contains("release-candidate"));
}

#[test]
fn test_compare_empty_rank() {
    let home = TestHome::new();
    home.command()
        .args(["compare", "1..0", "1.0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Empty rank"));
}

#[test]
fn test_check_exit_status() {
    let home = TestHome::new();
    let cases = [
        ("1.0.0", "lt", "2.0.0", true),
        ("1.0.0", "lt", "1.42.0", true),
        ("1.2.0", "<", "1.2.42", true),
        ("1.0.0-rc.1", "ge", "1.0.0", false),
        ("1.0", "eq", "1.0.0", true),
        ("1.0", "ne", "1.0.0", false),
        ("1.0.0-sr", "gt", "1.0.0", true),
        ("1.0.0-beta", "le", "1.0.0-alpha", false),
    ];

    for (left, op, right, holds) in cases {
        let assert = home.command().args(["check", left, op, right]).assert();
        let assert = if holds {
            assert.success()
        } else {
            assert.code(1)
        };
        assert.stdout(predicate::str::is_empty());
    }
}

#[test]
fn test_check_alias_and_invalid_relation() {
    let home = TestHome::new();
    home.command()
        .args(["test", "2.0", "gt", "1rc"])
        .assert()
        .success();

    home.command()
        .args(["check", "2.0", "newer", "1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_check_invalid_version_is_not_false() {
    let home = TestHome::new();
    home.command()
        .args(["check", "1.0.0-foo", "lt", "2.0"])
        .assert()
        .code(2);
}

#[test]
fn test_help_lists_commands() {
    let home = TestHome::new();
    home.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("sort"))
        .stdout(predicate::str::contains("parse"));
}
