//! Integration tests for the typeahead controller's key-driven behavior.

use std::sync::Arc;

use parking_lot::Mutex;
use typeline::{
    ActiveItem, Direction, ElementId, Key, KeyReleaseEvent, MarkupList, SelectionEvent, Typeahead,
    TypeaheadConfig,
};

const INPUT: ElementId = ElementId::new(1);
const OTHER_INPUT: ElementId = ElementId::new(2);

fn fruits() -> Vec<String> {
    vec!["Apple".into(), "Banana".into(), "Grape".into()]
}

fn typeahead(config: TypeaheadConfig) -> Typeahead<MarkupList> {
    Typeahead::new(config, MarkupList::new()).unwrap()
}

fn navigating_typeahead() -> Typeahead<MarkupList> {
    typeahead(
        TypeaheadConfig::new()
            .with_input(INPUT)
            .with_collection(fruits())
            .with_key_navigation(true),
    )
}

fn key(key: Key, value: &str) -> KeyReleaseEvent {
    KeyReleaseEvent::new(INPUT, key, value)
}

#[test]
fn display_renders_matcher_output_in_order() {
    let mut ta = typeahead(
        TypeaheadConfig::new()
            .with_input(INPUT)
            .with_collection(fruits()),
    );

    ta.display_matches("a").unwrap();

    // All three fruits contain "a"; matcher order is collection order.
    let items = ta.rendered_items().unwrap().to_vec();
    assert_eq!(items.len(), 3);
    assert_eq!(ta.surface().len(), items.len());
    assert!(ta.surface().is_visible());
    assert!(
        ta.surface()
            .item_markup(items[1])
            .unwrap()
            .contains("B")
    );
}

#[test]
fn scenario_query_an_highlights_banana() {
    let mut ta = typeahead(
        TypeaheadConfig::new()
            .with_input(INPUT)
            .with_collection(fruits()),
    );

    ta.display_matches("an").unwrap();

    let items = ta.rendered_items().unwrap().to_vec();
    assert_eq!(items.len(), 1);
    assert_eq!(
        ta.surface().item_markup(items[0]),
        Some(r#"B<span class="hl">an</span><span class="hl">an</span>a"#)
    );
}

#[test]
fn empty_query_clears_and_hides_by_default() {
    let mut ta = typeahead(
        TypeaheadConfig::new()
            .with_input(INPUT)
            .with_collection(fruits()),
    );

    ta.display_matches("a").unwrap();
    ta.display_matches("").unwrap();

    assert!(ta.surface().is_empty());
    assert!(!ta.surface().is_visible());
    assert!(ta.rendered_items().is_none());
}

#[test]
fn empty_query_with_show_all_renders_collection_unhighlighted() {
    let mut ta = typeahead(
        TypeaheadConfig::new()
            .with_input(INPUT)
            .with_collection(fruits())
            .with_show_all_when_empty(true),
    );

    ta.display_matches("").unwrap();

    let items = ta.rendered_items().unwrap().to_vec();
    assert_eq!(items.len(), 3);
    assert!(ta.surface().is_visible());
    // No query, no highlight spans.
    assert_eq!(ta.surface().item_markup(items[0]), Some("Apple"));
}

#[test]
fn display_matches_is_idempotent() {
    let mut ta = typeahead(
        TypeaheadConfig::new()
            .with_input(INPUT)
            .with_collection(fruits()),
    );

    ta.display_matches("an").unwrap();
    let first: Vec<String> = ta
        .rendered_items()
        .unwrap()
        .iter()
        .map(|&h| ta.surface().item_markup(h).unwrap().to_string())
        .collect();

    ta.set_active_item(ActiveItem::At(0));
    ta.display_matches("an").unwrap();
    let second: Vec<String> = ta
        .rendered_items()
        .unwrap()
        .iter()
        .map(|&h| ta.surface().item_markup(h).unwrap().to_string())
        .collect();

    assert_eq!(first, second);
    // Re-rendering never touches the active item.
    assert_eq!(ta.active_item(), ActiveItem::At(0));
}

#[test]
fn down_rotation_visits_every_item_then_wraps() {
    let mut ta = navigating_typeahead();
    ta.display_matches("a").unwrap();
    let n = ta.rendered_items().unwrap().len();
    assert_eq!(n, 3);

    let mut visited = Vec::new();
    for _ in 0..=n {
        ta.navigate(Direction::Down).unwrap();
        visited.push(ta.active_item().index().unwrap());
    }
    assert_eq!(visited, vec![0, 1, 2, 0]);
}

#[test]
fn up_rotation_from_unselected_walks_backwards() {
    let mut ta = navigating_typeahead();
    ta.display_matches("a").unwrap();

    let mut visited = Vec::new();
    for _ in 0..4 {
        ta.navigate(Direction::Up).unwrap();
        visited.push(ta.active_item().index().unwrap());
    }
    assert_eq!(visited, vec![2, 1, 0, 2]);
}

#[test]
fn arrow_down_activates_first_item_and_emits_selection() {
    let mut ta = navigating_typeahead();
    let received: Arc<Mutex<Vec<SelectionEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let received_clone = received.clone();
    ta.item_selected.connect(move |selection| {
        received_clone.lock().push(*selection);
    });

    ta.handle_key_release(&key(Key::Character('a'), "a")).unwrap();
    ta.handle_key_release(&key(Key::ArrowDown, "a")).unwrap();

    assert_eq!(ta.active_item(), ActiveItem::At(0));
    let items = ta.rendered_items().unwrap().to_vec();
    assert!(ta.surface().is_active(items[0]));

    let selections = received.lock();
    assert_eq!(selections.len(), 1);
    assert_eq!(selections[0].index, 0);
    assert_eq!(selections[0].item, items[0]);
}

#[test]
fn arrow_down_from_last_wraps_to_first() {
    let mut ta = navigating_typeahead();
    ta.handle_key_release(&key(Key::Character('a'), "a")).unwrap();

    ta.set_active_item(ActiveItem::At(2));
    ta.handle_key_release(&key(Key::ArrowDown, "a")).unwrap();

    assert_eq!(ta.active_item(), ActiveItem::At(0));
}

#[test]
fn enter_is_ignored_entirely() {
    let mut ta = navigating_typeahead();
    ta.handle_key_release(&key(Key::Character('a'), "a")).unwrap();
    let before = ta.rendered_items().unwrap().len();

    ta.handle_key_release(&key(Key::Enter, "a")).unwrap();

    // No re-render, no reset.
    assert_eq!(ta.rendered_items().unwrap().len(), before);
}

#[test]
fn events_for_other_targets_are_ignored() {
    let mut ta = navigating_typeahead();
    ta.handle_key_release(&KeyReleaseEvent::new(
        OTHER_INPUT,
        Key::Character('a'),
        "a",
    ))
    .unwrap();

    assert!(ta.rendered_items().is_none());
    assert!(!ta.surface().is_visible());
}

#[test]
fn non_navigation_key_resets_state_but_keeps_markup() {
    let mut ta = navigating_typeahead();
    ta.handle_key_release(&key(Key::Character('a'), "a")).unwrap();
    ta.handle_key_release(&key(Key::ArrowDown, "a")).unwrap();
    assert!(ta.surface().scroll_top() >= 0.0);

    // An unrelated key with unchanged text: navigation state resets, the
    // rendered markup stays visible.
    ta.handle_key_release(&key(Key::Escape, "a")).unwrap();

    assert_eq!(ta.active_item(), ActiveItem::None);
    assert!(ta.rendered_items().is_none());
    assert_eq!(ta.surface().scroll_top(), 0.0);
    assert!(ta.surface().is_visible());
    assert_eq!(ta.surface().len(), 3);
}

#[test]
fn clear_also_empties_and_hides() {
    let mut ta = navigating_typeahead();
    ta.handle_key_release(&key(Key::Character('a'), "a")).unwrap();
    ta.handle_key_release(&key(Key::ArrowDown, "a")).unwrap();

    ta.clear().unwrap();

    assert_eq!(ta.active_item(), ActiveItem::None);
    assert!(ta.rendered_items().is_none());
    assert!(ta.surface().is_empty());
    assert!(!ta.surface().is_visible());
}

#[test]
fn inert_controller_ignores_key_events() {
    let mut ta = typeahead(TypeaheadConfig::new().with_collection(fruits()));
    assert!(!ta.is_enabled());

    ta.handle_key_release(&key(Key::Character('a'), "a")).unwrap();
    assert!(ta.rendered_items().is_none());
}

#[test]
fn arrow_keys_renavigate_after_reset() {
    // A non-navigation key forgets the rendered list; the next arrow key
    // re-renders from the unchanged input text and navigation starts over.
    let mut ta = navigating_typeahead();
    ta.handle_key_release(&key(Key::Character('a'), "a")).unwrap();
    ta.handle_key_release(&key(Key::ArrowDown, "a")).unwrap();
    ta.handle_key_release(&key(Key::Escape, "a")).unwrap();
    assert!(ta.rendered_items().is_none());

    ta.handle_key_release(&key(Key::ArrowDown, "a")).unwrap();
    assert_eq!(ta.active_item(), ActiveItem::At(0));
    assert_eq!(ta.rendered_items().unwrap().len(), 3);
}

#[test]
fn selection_signal_fires_on_every_navigation_step() {
    let mut ta = navigating_typeahead();
    let count = Arc::new(Mutex::new(0));
    let count_clone = count.clone();
    ta.item_selected.connect(move |_| {
        *count_clone.lock() += 1;
    });

    ta.handle_key_release(&key(Key::Character('a'), "a")).unwrap();
    ta.handle_key_release(&key(Key::ArrowDown, "a")).unwrap();
    ta.handle_key_release(&key(Key::ArrowDown, "a")).unwrap();
    ta.handle_key_release(&key(Key::ArrowUp, "a")).unwrap();

    assert_eq!(*count.lock(), 3);
}

#[test]
fn two_instances_share_one_key_stream_without_interference() {
    let mut first = navigating_typeahead();
    let mut second = typeahead(
        TypeaheadConfig::new()
            .with_input(OTHER_INPUT)
            .with_collection(vec!["Mango".into(), "Melon".into()])
            .with_key_navigation(true),
    );

    // The host broadcasts the same event to every controller.
    let event = key(Key::Character('a'), "a");
    first.handle_key_release(&event).unwrap();
    second.handle_key_release(&event).unwrap();

    assert_eq!(first.rendered_items().unwrap().len(), 3);
    assert!(second.rendered_items().is_none());
}
