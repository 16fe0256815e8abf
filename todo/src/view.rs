//! Read-only view data for a rendering layer.

use crate::types::Todo;
use serde::Serialize;

/// What a renderer needs to draw the todo list
///
/// Borrowed from the store; recomputed on every call to
/// [`TodoStore::view`](crate::TodoStore::view).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoView<'a> {
    /// Todos in display order
    pub items: &'a [Todo],
    /// False when the renderer should show the empty-state placeholder
    pub has_items: bool,
    /// Number of todos not yet completed
    pub active_count: usize,
}

impl<'a> TodoView<'a> {
    /// Builds the view for a list of todos
    #[must_use]
    pub fn new(items: &'a [Todo]) -> Self {
        Self {
            items,
            has_items: !items.is_empty(),
            active_count: items.iter().filter(|t| t.is_active()).count(),
        }
    }

    /// Badge label such as `"2 active"`, shown only when the list has items
    #[must_use]
    pub fn badge(&self) -> Option<String> {
        self.has_items.then(|| format!("{} active", self.active_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoId;
    use uuid::Uuid;

    fn todo(n: u128, text: &str, completed: bool) -> Todo {
        let mut todo = Todo::new(TodoId::from_uuid(Uuid::from_u128(n)), text.to_string());
        todo.is_completed = completed;
        todo
    }

    #[test]
    fn empty_list_has_no_badge() {
        let view = TodoView::new(&[]);
        assert!(!view.has_items);
        assert_eq!(view.active_count, 0);
        assert_eq!(view.badge(), None);
    }

    #[test]
    fn badge_counts_active_todos() {
        let todos = [todo(1, "A", false), todo(2, "B", true), todo(3, "C", false)];
        let view = TodoView::new(&todos);

        assert!(view.has_items);
        assert_eq!(view.active_count, 2);
        assert_eq!(view.badge().as_deref(), Some("2 active"));
    }

    #[test]
    fn all_completed_still_shows_badge() {
        let todos = [todo(1, "A", true)];
        assert_eq!(TodoView::new(&todos).badge().as_deref(), Some("0 active"));
    }

    #[test]
    fn view_serializes_for_renderer() {
        let todos = [todo(1, "A", false)];
        let json = serde_json::to_value(TodoView::new(&todos)).unwrap();

        assert_eq!(json["hasItems"], true);
        assert_eq!(json["activeCount"], 1);
        assert_eq!(json["items"][0]["text"], "A");
    }
}
