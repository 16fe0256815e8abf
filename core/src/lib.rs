//! # Composable Todo Core
//!
//! Core traits and types for the reducer/store architecture the todo store is
//! built on.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state owned by a store
//! - **Action**: Every input to a reducer (user intents and fed-back actions)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Description of follow-up work, executed by the runtime
//! - **Environment**: Injected dependencies (id generation)
//!
//! ## Example
//!
//! ```
//! use composable_todo_core::{Effect, Reducer, SmallVec, smallvec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Tally {
//!     total: u32,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum TallyAction {
//!     Bump,
//! }
//!
//! struct TallyReducer;
//!
//! impl Reducer for TallyReducer {
//!     type State = Tally;
//!     type Action = TallyAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut Tally,
//!         action: TallyAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<TallyAction>; 4]> {
//!         match action {
//!             TallyAction::Bump => state.total += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = Tally::default();
//! TallyReducer.reduce(&mut state, TallyAction::Bump, &());
//! assert_eq!(state.total, 1);
//! ```

pub use smallvec::{SmallVec, smallvec};

pub use effect::Effect;
pub use environment::{IdGenerator, RandomIdGenerator};
pub use reducer::Reducer;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They hold all business logic and are deterministic given their environment.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// Implementations validate the action, update `state` in place and
        /// return descriptions of follow-up work. Invalid actions should leave
        /// the state untouched rather than fail.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects are values, not execution. Reducers return them and the runtime
/// `Store` interprets them after the reducer has finished.
pub mod effect {
    /// Effect type - describes follow-up work to be executed by the store
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the reducer
        Send(Action),

        /// Run effects in order
        Sequential(Vec<Effect<Action>>),
    }

    impl<Action> Effect<Action> {
        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Returns true if this effect does nothing when executed
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Effect::None => true,
                Effect::Send(_) => false,
                Effect::Sequential(effects) => effects.iter().all(Effect::is_none),
            }
        }

        /// Flattens this effect into the actions it feeds back, in order
        #[must_use]
        pub fn into_actions(self) -> Vec<Action> {
            let mut actions = Vec::new();
            self.collect_actions(&mut actions);
            actions
        }

        fn collect_actions(self, out: &mut Vec<Action>) {
            match self {
                Effect::None => {}
                Effect::Send(action) => out.push(action),
                Effect::Sequential(effects) => {
                    for effect in effects {
                        effect.collect_actions(out);
                    }
                }
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// External sources of non-determinism are abstracted behind traits and
/// injected via the reducer's Environment parameter.
pub mod environment {
    use uuid::Uuid;

    /// Generates identifiers for newly created entities
    ///
    /// Every call must return a value never returned before by the same
    /// generator.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Production - random v4 UUIDs
    /// let ids = RandomIdGenerator;
    ///
    /// // Test - predictable ids
    /// let ids = SequentialIdGenerator::new();
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Returns a fresh identifier
        fn next_id(&self) -> Uuid;
    }

    /// Random v4 UUID generator for production use
    #[derive(Debug, Clone, Copy, Default)]
    pub struct RandomIdGenerator;

    impl IdGenerator for RandomIdGenerator {
        fn next_id(&self) -> Uuid {
            Uuid::new_v4()
        }
    }
}
