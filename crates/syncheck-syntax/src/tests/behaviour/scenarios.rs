//! Scenario bindings for the syntax validation feature file.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::scenario;

use super::TestWorld;

#[fixture]
fn world() -> RefCell<TestWorld> {
    super::world()
}

#[scenario(
    path = "tests/features/syntax_validation.feature",
    name = "A minimal Go program is valid"
)]
fn minimal_go_program(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/syntax_validation.feature",
    name = "An unterminated Go function is invalid"
)]
fn unterminated_go_function(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/syntax_validation.feature",
    name = "Empty Go source is invalid"
)]
fn empty_go_source(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/syntax_validation.feature",
    name = "A statement outside a function is invalid Go"
)]
fn top_level_statement(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/syntax_validation.feature",
    name = "Several errors are aggregated into one diagnostic"
)]
fn aggregated_errors(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/syntax_validation.feature",
    name = "A Rust deployment checks Rust syntax"
)]
fn rust_deployment(world: RefCell<TestWorld>) {
    drop(world);
}
