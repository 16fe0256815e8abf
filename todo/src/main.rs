//! Scripted terminal session for the todo store.
//!
//! Plays the part of the rendering layer: types into the form, submits,
//! toggles and removes, printing what a UI would show after each step.

use todo::{TodoId, TodoStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn render(store: &TodoStore) {
    let view = store.view();

    match view.badge() {
        Some(badge) => println!("Todo List [{badge}]"),
        None => println!("Todo List"),
    }

    if !view.has_items {
        println!("  No todos yet. Add your first todo to get started");
        return;
    }

    for todo in view.items {
        let status = if todo.is_completed { "✓" } else { " " };
        println!("  [{status}] {}", todo.text);
    }
}

fn type_and_submit(store: &mut TodoStore, text: &str) {
    println!("\n>>> Submitting {text:?}");
    store.set_draft(text);
    store.submit();
    render(store);
}

fn id_of(store: &TodoStore, text: &str) -> Option<TodoId> {
    store.list().iter().find(|t| t.text == text).map(|t| t.id)
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=debug,composable_todo_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Todo Store ===\n");

    let mut store = TodoStore::new();
    render(&store);

    type_and_submit(&mut store, "Buy milk");
    type_and_submit(&mut store, "   ");
    type_and_submit(&mut store, "  Write documentation ");
    type_and_submit(&mut store, "Deploy to production");

    if let Some(id) = id_of(&store, "Buy milk") {
        println!("\n>>> Completing 'Buy milk'");
        store.toggle(&id);
        render(&store);
    }

    if let Some(id) = id_of(&store, "Deploy to production") {
        println!("\n>>> Deleting 'Deploy to production'");
        store.remove(&id);
        render(&store);
    }

    println!("\n>>> Toggling an id typed by hand");
    match "not-a-real-id".parse::<TodoId>() {
        Ok(id) => store.toggle(&id),
        Err(error) => println!("  rejected: {error}"),
    }

    let remaining: Vec<TodoId> = store.list().iter().map(|t| t.id).collect();
    println!("\n>>> Deleting everything");
    for id in &remaining {
        store.remove(id);
    }
    render(&store);

    println!("\n=== Session Complete ===");
}
