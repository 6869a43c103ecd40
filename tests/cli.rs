//
//  clumio-sdk
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use predicates::prelude::*;

fn clumio() -> Command {
    let mut cmd = Command::cargo_bin("clumio").unwrap();
    cmd.env_remove("CLUMIO_API_TOKEN")
        .env_remove("CLUMIO_HOSTNAME")
        .env_remove("CLUMIO_PROFILE")
        .env_remove("CLUMIO_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    clumio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ops"))
        .stdout(predicate::str::contains("call"));
}

#[test]
fn test_ops_json_lists_catalog() {
    clumio()
        .args(["ops", "restore", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("restore_aws_ebs_volume"))
        .stdout(predicate::str::contains("list_tasks").not());
}

#[test]
fn test_missing_token_is_a_configuration_error() {
    clumio()
        .args(["call", "list_tasks"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("CLUMIO_API_TOKEN"));
}

#[test]
fn test_unknown_operation_fails_before_any_request() {
    clumio()
        .env("CLUMIO_API_TOKEN", "t")
        .args(["call", "list_everything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("clumio ops"));
}

#[test]
fn test_call_reads_task_from_server() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/tasks/t-1")
        .match_header("authorization", "Bearer t")
        .match_header("x-trace", "abc")
        .with_status(200)
        .with_body(r#"{"id": "t-1", "type": "restore", "status": "completed"}"#)
        .create();

    clumio()
        .env("CLUMIO_API_TOKEN", "t")
        .args(["--hostname", &server.url(), "-H", "x-trace: abc"])
        .args(["call", "read_task", "-p", "task_id=t-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"completed\""));
    mock.assert();
}

#[test]
fn test_error_status_exits_non_zero_with_vendor_body() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/tasks/t-404")
        .with_status(404)
        .with_body(r#"{"errors": [{"error_code": 404, "error_message": "Task not found"}]}"#)
        .create();

    clumio()
        .env("CLUMIO_API_TOKEN", "t")
        .args(["--hostname", &server.url()])
        .args(["call", "read_task", "-p", "task_id=t-404"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Task not found"));
}
