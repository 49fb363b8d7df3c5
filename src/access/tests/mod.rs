//! Unit tests for the access policy.

mod operation_tests;
