//! Unit tests for chat channels, messages and the chat service.

mod service_tests;
