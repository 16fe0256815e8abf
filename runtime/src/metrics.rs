//! Metric names recorded by the [`Store`](crate::Store).
//!
//! The store records through the `metrics` facade. Nothing is exported unless
//! the embedding application installs a recorder; call [`describe`] after
//! installing one to attach help text to every metric.

use ::metrics::{describe_counter, describe_histogram};

/// Total number of actions sent to a store (fed-back actions included)
pub const ACTIONS_TOTAL: &str = "store.actions.total";

/// Wall time spent inside `Reducer::reduce`
pub const REDUCER_DURATION_SECONDS: &str = "store.reducer.duration_seconds";

/// Number of effects returned per reducer call
pub const EFFECTS_COUNT: &str = "store.effects.count";

/// Number of `send` calls aborted by the feedback limit
pub const FEEDBACK_LIMIT_EXCEEDED: &str = "store.feedback.limit_exceeded";

/// Register descriptions for all store metrics with the installed recorder.
pub fn describe() {
    describe_counter!(
        ACTIONS_TOTAL,
        "Total number of actions processed by the store, including fed-back actions"
    );
    describe_histogram!(
        REDUCER_DURATION_SECONDS,
        "Time taken by a single reducer invocation"
    );
    describe_histogram!(EFFECTS_COUNT, "Number of effects returned by a reducer invocation");
    describe_counter!(
        FEEDBACK_LIMIT_EXCEEDED,
        "Number of sends aborted because effect feedback exceeded the configured limit"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_without_recorder_is_noop() {
        describe();
    }

    #[test]
    fn metric_names_are_namespaced() {
        for name in [
            ACTIONS_TOTAL,
            REDUCER_DURATION_SECONDS,
            EFFECTS_COUNT,
            FEEDBACK_LIMIT_EXCEEDED,
        ] {
            assert!(name.starts_with("store."), "{name} should be namespaced");
        }
    }
}
