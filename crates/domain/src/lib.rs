//! Argonaut Domain - Core types for the declarative API test runner
//!
//! This crate defines the domain model: test-definition files, resolved
//! test cases, request descriptors, body-path resolution, and
//! verification outcomes. All types here are pure Rust with no I/O
//! dependencies.

pub mod compare;
pub mod definition;
pub mod descriptor;
pub mod error;
pub mod method;
pub mod outcome;
pub mod path;
pub mod resolved;

pub use compare::loosely_equal;
pub use definition::{ExpectedAssertion, ResponseType, TestCase, TestFile};
pub use descriptor::{HostOverrides, RequestDescriptor, Scheme};
pub use error::{DomainError, DomainResult};
pub use method::HttpMethod;
pub use outcome::{AssertionFailure, VerificationOutcome};
pub use path::resolve;
pub use resolved::ResolvedCase;
