//! Scenario bindings for the HTTP contract feature file.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::scenario;

use crate::tests::support::{self, TestWorld};

#[fixture]
fn world() -> RefCell<TestWorld> {
    support::world()
}

#[scenario(
    path = "tests/features/http_contract.feature",
    name = "Well-formed Go is reported valid"
)]
fn well_formed_go(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/http_contract.feature",
    name = "A wrong key is rejected"
)]
fn wrong_key(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/http_contract.feature",
    name = "Malformed Go is reported with a diagnostic"
)]
fn malformed_go(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/http_contract.feature",
    name = "A request without a key is rejected"
)]
fn missing_key(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/http_contract.feature",
    name = "A service without a credential rejects everything"
)]
fn unconfigured_credential(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/http_contract.feature",
    name = "An undecodable body is a bad request"
)]
fn undecodable_body(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/http_contract.feature",
    name = "Repeated requests are answered identically"
)]
fn repeated_requests(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/http_contract.feature",
    name = "The privacy notice is public"
)]
fn privacy_notice(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/http_contract.feature",
    name = "A Rust deployment checks Rust syntax"
)]
fn rust_deployment(world: RefCell<TestWorld>) {
    drop(world);
}
