//! Integration tests for the AuthGate HTTP surface.


mod auth_test;
mod gateway_test;
