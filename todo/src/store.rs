//! The `TodoStore` facade.
//!
//! Wraps the runtime [`Store`] with the call contract a rendering layer
//! uses: three mutations, the form draft, and read accessors.

use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{Todo, TodoAction, TodoId, TodoState};
use crate::view::TodoView;
use composable_todo_runtime::{Store, StoreConfig};

/// Owned todo list for one session
///
/// Mutations never fail: blank text and unknown ids are ignored.
///
/// # Example
///
/// ```
/// use todo::TodoStore;
///
/// let mut todos = TodoStore::new();
/// todos.add("Buy milk");
/// todos.add("   ");
/// assert_eq!(todos.len(), 1);
///
/// let id = todos.list()[0].id;
/// todos.toggle(&id);
/// assert_eq!(todos.active_count(), 0);
///
/// todos.remove(&id);
/// assert!(todos.is_empty());
/// ```
#[derive(Debug)]
pub struct TodoStore {
    store: Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>,
}

impl TodoStore {
    /// Creates an empty store with random ids and default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_environment(TodoEnvironment::default())
    }

    /// Creates an empty store with the given environment
    #[must_use]
    pub fn with_environment(env: TodoEnvironment) -> Self {
        Self::with_config(env, StoreConfig::default())
    }

    /// Creates an empty store with the given environment and configuration
    #[must_use]
    pub fn with_config(env: TodoEnvironment, config: StoreConfig) -> Self {
        Self {
            store: Store::with_config(TodoState::new(), TodoReducer::new(), env, config),
        }
    }

    /// Appends a todo with the trimmed `text`; blank text is ignored
    pub fn add(&mut self, text: &str) {
        self.send(TodoAction::Add {
            text: text.to_owned(),
        });
    }

    /// Flips the todo between pending and completed; unknown ids are ignored
    pub fn toggle(&mut self, id: &TodoId) {
        self.send(TodoAction::Toggle { id: *id });
    }

    /// Removes the todo; unknown ids are ignored
    pub fn remove(&mut self, id: &TodoId) {
        self.send(TodoAction::Remove { id: *id });
    }

    /// Replaces the input form's draft text
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.send(TodoAction::DraftChanged { text: text.into() });
    }

    /// Submits the draft: adds it as a todo and clears it, unless it is blank
    pub fn submit(&mut self) {
        self.send(TodoAction::SubmitDraft);
    }

    /// Sends any action through the store
    pub fn send(&mut self, action: TodoAction) {
        if let Err(error) = self.store.send(action) {
            tracing::warn!(%error, "Todo action aborted");
        }
    }

    /// Todos in insertion order
    #[must_use]
    pub fn list(&self) -> &[Todo] {
        &self.state().todos
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.state().get(id)
    }

    /// Number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.state().len()
    }

    /// Returns true if there are no todos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state().is_empty()
    }

    /// Number of todos not yet completed
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.state().active_count()
    }

    /// Number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.state().completed_count()
    }

    /// Current draft text
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.state().draft
    }

    /// View data for rendering
    #[must_use]
    pub fn view(&self) -> TodoView<'_> {
        TodoView::new(self.list())
    }

    /// The whole session state
    #[must_use]
    pub const fn state(&self) -> &TodoState {
        self.store.state()
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
