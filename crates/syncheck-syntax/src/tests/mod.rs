//! Test suites for syncheck-syntax.
