//! Integration tests for the synchronous Store runtime.

use composable_todo_core::{Effect, IdGenerator, Reducer, SmallVec, smallvec};
use composable_todo_runtime::{DEFAULT_MAX_FEEDBACK_ACTIONS, Store, StoreConfig, StoreError};
use composable_todo_testing::{SequentialIdGenerator, init_test_tracing};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Default, PartialEq)]
struct Ledger {
    entries: Vec<(Uuid, u32)>,
}

#[derive(Debug, Clone)]
enum LedgerAction {
    Open(u32),
    /// Opens `count` entries, each fed back as its own action
    OpenMany(u32),
}

struct LedgerEnv {
    ids: Arc<dyn IdGenerator>,
}

struct LedgerReducer;

impl Reducer for LedgerReducer {
    type State = Ledger;
    type Action = LedgerAction;
    type Environment = LedgerEnv;

    fn reduce(
        &self,
        state: &mut Ledger,
        action: LedgerAction,
        env: &LedgerEnv,
    ) -> SmallVec<[Effect<LedgerAction>; 4]> {
        match action {
            LedgerAction::Open(amount) => {
                state.entries.push((env.ids.next_id(), amount));
                smallvec![Effect::None]
            },
            LedgerAction::OpenMany(count) => smallvec![Effect::chain(
                (1..=count).map(|n| Effect::Send(LedgerAction::Open(n))).collect()
            )],
        }
    }
}

fn ledger_store(config: StoreConfig) -> Store<Ledger, LedgerAction, LedgerEnv, LedgerReducer> {
    init_test_tracing();
    let env = LedgerEnv {
        ids: Arc::new(SequentialIdGenerator::new()),
    };
    Store::with_config(Ledger::default(), LedgerReducer, env, config)
}

#[test]
fn fed_back_actions_use_the_environment() {
    let mut store = ledger_store(StoreConfig::default());

    assert!(store.send(LedgerAction::OpenMany(3)).is_ok());

    assert_eq!(
        store.state().entries,
        vec![
            (SequentialIdGenerator::nth(1), 1),
            (SequentialIdGenerator::nth(2), 2),
            (SequentialIdGenerator::nth(3), 3),
        ]
    );
}

#[test]
fn feedback_limit_keeps_completed_work() {
    let mut store = ledger_store(StoreConfig::default().with_max_feedback_actions(2));

    let result = store.send(LedgerAction::OpenMany(5));

    assert_eq!(result, Err(StoreError::FeedbackLimitExceeded { limit: 2 }));
    assert_eq!(store.state().entries.len(), 2);

    // The store keeps accepting actions afterwards
    assert!(store.send(LedgerAction::Open(9)).is_ok());
    assert_eq!(store.state().entries.len(), 3);
}

#[test]
fn config_deserializes_with_defaults() {
    let config: StoreConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.max_feedback_actions, DEFAULT_MAX_FEEDBACK_ACTIONS);

    let config: StoreConfig = serde_json::from_str(r#"{"max_feedback_actions": 4}"#).unwrap();
    assert_eq!(config, StoreConfig::new(4));
}

#[test]
fn store_exposes_config_and_environment() {
    let store = ledger_store(StoreConfig::new(7));
    assert_eq!(store.config().max_feedback_actions, 7);
    assert_eq!(store.environment().ids.next_id(), SequentialIdGenerator::nth(1));
}
