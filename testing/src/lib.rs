//! # Composable Todo Testing
//!
//! Testing utilities and helpers for the composable todo store.
//!
//! This crate provides:
//! - Deterministic implementations of Environment traits
//! - [`ReducerTest`], a Given-When-Then harness for reducers
//! - Assertion helpers for effects
//! - proptest strategies for todo text
//!
//! ## Example
//!
//! ```ignore
//! use composable_todo_testing::{ReducerTest, SequentialIdGenerator, assertions};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::new(Arc::new(SequentialIdGenerator::new())))
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::Add { text: "Buy milk".into() })
//!     .then_state(|state| assert_eq!(state.len(), 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use composable_todo_core::environment::IdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;


pub use reducer_test::{ReducerTest, assertions};

/// Deterministic implementations of Environment traits
pub mod mocks {
    use super::{AtomicU64, IdGenerator, Ordering, Uuid};

    /// Sequential id generator for deterministic tests
    ///
    /// Produces `Uuid::from_u128(1)`, `Uuid::from_u128(2)`, ... so tests can
    /// name ids before they are generated.
    ///
    /// # Example
    ///
    /// ```
    /// use composable_todo_core::IdGenerator;
    /// use composable_todo_testing::mocks::SequentialIdGenerator;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), SequentialIdGenerator::nth(1));
    /// assert_eq!(ids.next_id(), SequentialIdGenerator::nth(2));
    /// ```
    #[derive(Debug)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first id is `nth(1)`
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_at(1)
        }

        /// Create a generator whose first id is `nth(first)`
        #[must_use]
        pub const fn starting_at(first: u64) -> Self {
            Self {
                next: AtomicU64::new(first),
            }
        }

        /// The id this generator returns on its `n`th call (1-based, default start)
        #[must_use]
        pub const fn nth(n: u64) -> Uuid {
            Uuid::from_u128(n as u128)
        }

        /// Number the next call will use
        #[must_use]
        pub fn peek(&self) -> u64 {
            self.next.load(Ordering::Relaxed)
        }
    }

    impl Default for SequentialIdGenerator {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> Uuid {
            Self::nth(self.next.fetch_add(1, Ordering::Relaxed))
        }
    }
}

/// Test helpers and utilities
pub mod helpers {
    /// Install a `tracing` subscriber that writes through the test harness
    ///
    /// Honors `RUST_LOG`; defaults to `debug`. Safe to call from every test,
    /// only the first call installs the subscriber.
    pub fn init_test_tracing() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing utilities
///
/// proptest strategies for the text a user may type into the todo form.
pub mod properties {
    use proptest::prelude::*;

    /// Text with at least one non-whitespace character
    ///
    /// May carry leading or trailing whitespace, so callers should compare
    /// against `text.trim()`.
    pub fn non_blank_text() -> impl Strategy<Value = String> {
        ("[ \t]{0,3}", "[a-zA-Z0-9][a-zA-Z0-9 ,.!?-]{0,30}", "[ \t\n]{0,3}")
            .prop_map(|(lead, body, trail)| format!("{lead}{body}{trail}"))
    }

    /// Empty or whitespace-only text
    pub fn blank_text() -> impl Strategy<Value = String> {
        "[ \t\n\r]{0,8}"
    }

    /// A list of texts to add, mixing blank and non-blank entries
    pub fn text_batch(max: usize) -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(prop_oneof![3 => non_blank_text(), 1 => blank_text()], 0..max)
    }
}

// Re-export commonly used items
pub use helpers::init_test_tracing;
pub use mocks::SequentialIdGenerator;
