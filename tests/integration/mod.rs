//! Integration tests for the streaming log merge engine

mod discovery;
mod failure_policy;
