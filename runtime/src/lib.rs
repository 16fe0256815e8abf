//! # Composable Todo Runtime
//!
//! Runtime for the composable todo architecture.
//!
//! This crate provides the [`Store`] that owns state, runs a reducer for each
//! action and executes the effects the reducer returns.
//!
//! ## Core Components
//!
//! - **Store**: Owns the state and coordinates reducer execution
//! - **Effect Executor**: Interprets effect descriptions and feeds actions back
//! - **Config**: [`StoreConfig`] bounds the feedback loop
//!
//! The store is fully synchronous. `send` returns only after the action and
//! every action fed back by its effects have been reduced.
//!
//! ## Example
//!
//! ```ignore
//! use composable_todo_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state().some_field;
//! ```

use composable_todo_core::{effect::Effect, reducer::Reducer};
use serde::Deserialize;
use std::collections::VecDeque;

/// Metric names and descriptions
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Effects kept feeding actions back past the configured limit
        ///
        /// The action that crossed the limit and everything queued behind it
        /// were dropped. State changes made before that point are kept.
        #[error("Effect feedback exceeded {limit} follow-up actions")]
        FeedbackLimitExceeded {
            /// The configured `max_feedback_actions`
            limit: usize,
        },
    }
}

pub use error::StoreError;

/// Default bound on fed-back actions per `send`
pub const DEFAULT_MAX_FEEDBACK_ACTIONS: usize = 64;

/// Configuration for Store behavior
///
/// # Example
///
/// ```
/// use composable_todo_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_max_feedback_actions(8);
/// assert_eq!(config.max_feedback_actions, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum number of actions effects may feed back during one `send`
    pub max_feedback_actions: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_feedback_actions: usize) -> Self {
        Self {
            max_feedback_actions,
        }
    }

    /// Set the feedback limit
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, limit: usize) -> Self {
        self.max_feedback_actions = limit;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_actions: DEFAULT_MAX_FEEDBACK_ACTIONS,
        }
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{Deque, Effect, Reducer, StoreConfig, StoreError, metrics};

    /// The Store - owns state and runs the reducer
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// The store is an ordinary owned value. Mutation goes through
    /// [`Store::send`], which needs `&mut self`, so there is exactly one
    /// writer at any time and no locking.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut store = Store::new(
    ///     TodoState::new(),
    ///     TodoReducer::new(),
    ///     TodoEnvironment::default(),
    /// );
    ///
    /// store.send(TodoAction::Add { text: "Buy milk".into() })?;
    /// assert_eq!(store.state().len(), 1);
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
        config: StoreConfig,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub const fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                state: initial_state,
                reducer,
                environment,
                config,
            }
        }

        /// Send an action to the store
        ///
        /// Runs the reducer on `action`, then executes the returned effects.
        /// Actions fed back by `Effect::Send` are queued and reduced in FIFO
        /// order before this call returns.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackLimitExceeded`] when effects feed back
        /// more than `max_feedback_actions` actions. The remaining queue is
        /// dropped; state changes already applied are kept.
        #[tracing::instrument(skip_all, name = "store_send")]
        pub fn send(&mut self, action: A) -> Result<(), StoreError> {
            tracing::debug!("Processing action");

            let limit = self.config.max_feedback_actions;
            let mut queue = Deque::from([action]);
            let mut fed_back = 0usize;
            let mut first = true;

            while let Some(action) = queue.pop_front() {
                if !first {
                    if fed_back == limit {
                        tracing::warn!(
                            limit,
                            dropped = queue.len() + 1,
                            "Effect feedback limit exceeded, dropping queued actions"
                        );
                        ::metrics::counter!(metrics::FEEDBACK_LIMIT_EXCEEDED).increment(1);
                        return Err(StoreError::FeedbackLimitExceeded { limit });
                    }
                    fed_back += 1;
                }
                first = false;

                for effect in self.reduce(action) {
                    Self::execute_effect(effect, &mut queue);
                }
            }

            tracing::debug!(fed_back, "Action processing completed");
            Ok(())
        }

        /// Run the reducer once, recording metrics
        fn reduce(&mut self, action: A) -> crate::EffectBatch<A> {
            ::metrics::counter!(metrics::ACTIONS_TOTAL).increment(1);

            let span = tracing::debug_span!("reducer_execution");
            let _enter = span.enter();

            let start = std::time::Instant::now();
            let effects = self
                .reducer
                .reduce(&mut self.state, action, &self.environment);
            ::metrics::histogram!(metrics::REDUCER_DURATION_SECONDS)
                .record(start.elapsed().as_secs_f64());

            tracing::trace!("Reducer completed, returned {} effects", effects.len());

            // Effect counts stay far below 2^52
            #[allow(clippy::cast_precision_loss)]
            ::metrics::histogram!(metrics::EFFECTS_COUNT).record(effects.len() as f64);

            effects
        }

        /// Execute one effect, queueing any actions it feeds back
        fn execute_effect(effect: Effect<A>, queue: &mut Deque<A>) {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                },
                Effect::Send(action) => {
                    tracing::trace!("Executing Effect::Send, queueing action");
                    queue.push_back(action);
                },
                Effect::Sequential(effects) => {
                    tracing::trace!("Executing Effect::Sequential with {} effects", effects.len());
                    for effect in effects {
                        Self::execute_effect(effect, queue);
                    }
                },
            }
        }

        /// Borrow the current state
        #[must_use]
        pub const fn state(&self) -> &S {
            &self.state
        }

        /// Borrow the injected environment
        #[must_use]
        pub const fn environment(&self) -> &E {
            &self.environment
        }

        /// The configuration this store was built with
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// Consume the store and return its state
        #[must_use]
        pub fn into_state(self) -> S {
            self.state
        }
    }

    impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("state", &self.state)
                .field("config", &self.config)
                .finish_non_exhaustive()
        }
    }
}

pub use store::Store;

type Deque<A> = VecDeque<A>;
type EffectBatch<A> = composable_todo_core::SmallVec<[Effect<A>; 4]>;
