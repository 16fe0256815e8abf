//! Todo list state store.
//!
//! The state-transition contract behind a client-side todo list, built on
//! the composable reducer/store architecture. Rendering is left to the
//! caller; this crate owns the collection and answers the questions a
//! renderer asks.
//!
//! It covers:
//!
//! - Adding todos (trimmed, blank text ignored)
//! - Toggling todos between pending and completed
//! - Removing todos
//! - The input form draft, submitted through effect feedback
//! - View data: empty state and the active-count badge
//!
//! # Quick Start
//!
//! ```
//! use todo::TodoStore;
//!
//! let mut todos = TodoStore::new();
//! todos.add("Buy milk");
//! todos.add("Write documentation");
//!
//! let first = todos.list()[0].id;
//! todos.toggle(&first);
//!
//! assert_eq!(todos.view().badge().as_deref(), Some("1 active"));
//! ```
//!
//! Ids arriving from a UI as strings parse with [`str::parse`]:
//!
//! ```
//! use todo::TodoId;
//!
//! assert!("not-an-id".parse::<TodoId>().is_err());
//! ```

pub mod reducer;
pub mod store;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use reducer::{TodoEnvironment, TodoReducer};
pub use store::TodoStore;
pub use types::{ParseTodoIdError, Todo, TodoAction, TodoId, TodoState};
pub use view::TodoView;
