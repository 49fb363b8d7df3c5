//! Unit tests for the role directory.
