//! Reducer logic for the todo list.
//!
//! Every mutation is total: blank text and unknown ids leave the state as it
//! was and are only reported through `tracing`.

use crate::types::{Todo, TodoAction, TodoId, TodoState};
use composable_todo_core::{
    Effect, SmallVec,
    environment::{IdGenerator, RandomIdGenerator},
    reducer::Reducer,
    smallvec,
};
use std::sync::Arc;

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Source of ids for new todos
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

impl Default for TodoEnvironment {
    fn default() -> Self {
        Self::new(Arc::new(RandomIdGenerator))
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn add(state: &mut TodoState, text: &str, env: &TodoEnvironment) {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("Ignoring blank todo text");
            return;
        }

        let id = TodoId::from_uuid(env.ids.next_id());
        if state.contains(&id) {
            tracing::warn!(%id, "Id generator returned an id already in use, todo not added");
            return;
        }

        state.todos.push(Todo::new(id, text.to_owned()));
        tracing::debug!(%id, count = state.len(), "Todo added");
    }

    fn toggle(state: &mut TodoState, id: &TodoId) {
        let Some(todo) = state.get_mut(id) else {
            tracing::debug!(%id, "Ignoring toggle of unknown todo");
            return;
        };

        todo.toggle();
        tracing::debug!(%id, completed = todo.is_completed, "Todo toggled");
    }

    fn remove(state: &mut TodoState, id: &TodoId) {
        let Some(position) = state.position(id) else {
            tracing::debug!(%id, "Ignoring removal of unknown todo");
            return;
        };

        state.todos.remove(position);
        tracing::debug!(%id, count = state.len(), "Todo removed");
    }

    /// Clears a non-blank draft and returns it as an `Add` action
    fn submit_draft(state: &mut TodoState) -> Option<TodoAction> {
        if state.draft.trim().is_empty() {
            tracing::debug!("Ignoring submit of blank draft");
            return None;
        }

        let text = std::mem::take(&mut state.draft);
        Some(TodoAction::Add { text })
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::Add { text } => Self::add(state, &text, env),
            TodoAction::Toggle { id } => Self::toggle(state, &id),
            TodoAction::Remove { id } => Self::remove(state, &id),
            TodoAction::DraftChanged { text } => state.draft = text,
            TodoAction::SubmitDraft => {
                if let Some(add) = Self::submit_draft(state) {
                    return smallvec![Effect::Send(add)];
                }
            },
        }

        smallvec![Effect::None]
    }
}
