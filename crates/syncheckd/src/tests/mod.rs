//! Test suites for the syncheck daemon.

mod support;
