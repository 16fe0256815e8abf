//! Domain types for the todo list.
//!
//! A todo list is an ordered collection of todo items that can be added,
//! toggled between pending and completed, and removed. The input form's
//! draft text lives next to the collection so the whole session state is one
//! value.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A string could not be parsed as a [`TodoId`]
#[derive(Debug, Error)]
#[error("invalid todo id {input:?}")]
pub struct ParseTodoIdError {
    input: String,
    #[source]
    source: uuid::Error,
}

impl ParseTodoIdError {
    /// The rejected input
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for TodoId {
    type Err = ParseTodoIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|source| ParseTodoIdError {
                input: s.to_owned(),
                source,
            })
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Label shown to the user, trimmed and never empty
    pub text: String,
    /// Whether the todo is completed
    pub is_completed: bool,
}

impl Todo {
    /// Creates a new pending todo
    #[must_use]
    pub const fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            is_completed: false,
        }
    }

    /// Flips between pending and completed
    pub const fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }

    /// Returns true while the todo is not completed
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.is_completed
    }
}

/// State of a todo list session
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// All todos in insertion order
    pub todos: Vec<Todo>,
    /// Text currently typed into the input form
    pub draft: String,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            draft: String::new(),
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns true if there are no todos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the number of todos that are not completed
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| t.is_active()).count()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.is_completed).count()
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == *id)
    }

    /// Returns a mutable todo by ID
    pub fn get_mut(&mut self, id: &TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == *id)
    }

    /// Returns the position of a todo in the list
    #[must_use]
    pub fn position(&self, id: &TodoId) -> Option<usize> {
        self.todos.iter().position(|t| t.id == *id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn contains(&self, id: &TodoId) -> bool {
        self.position(id).is_some()
    }
}

/// Every input the todo reducer handles
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Append a todo; blank text is ignored
    Add {
        /// Raw text, trimmed by the reducer
        text: String,
    },

    /// Flip a todo between pending and completed
    Toggle {
        /// Todo to toggle
        id: TodoId,
    },

    /// Delete a todo
    Remove {
        /// Todo to delete
        id: TodoId,
    },

    /// The input form's text changed
    DraftChanged {
        /// New draft text, stored verbatim
        text: String,
    },

    /// The input form was submitted
    SubmitDraft,
}
