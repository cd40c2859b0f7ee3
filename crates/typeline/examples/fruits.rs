//! Typeline walkthrough example
//!
//! Drives a typeahead controller through a typing session against the
//! in-memory [`MarkupList`] surface and prints what the user would see
//! after every keystroke. Controller logs are available through the
//! installed subscriber, e.g. `RUST_LOG=typeline=trace`.
//!
//! Run with: cargo run -p typeline --example fruits

use typeline::{
    ElementId, Key, KeyReleaseEvent, ListSurface, MarkupList, Typeahead, TypeaheadConfig,
};

fn main() -> typeline::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "typeline=debug".into()),
        )
        .init();

    let input = ElementId::new(1);
    let config = TypeaheadConfig::new()
        .with_input(input)
        .with_collection(vec![
            "Apple".into(),
            "Apricot".into(),
            "Banana".into(),
            "Grape".into(),
            "Mango".into(),
        ])
        .with_key_navigation(true);

    let mut typeahead = Typeahead::new(config, MarkupList::new())?;
    typeahead.item_selected.connect(|selection| {
        println!("   -> selection landed on item {}", selection.index);
    });

    // The user types "ap", then arrows through the matches.
    let session = [
        (Key::Character('a'), "a"),
        (Key::Character('p'), "ap"),
        (Key::ArrowDown, "ap"),
        (Key::ArrowDown, "ap"),
        (Key::ArrowUp, "ap"),
    ];
    for (key, value) in session {
        println!("key {key:?}, input {value:?}:");
        typeahead.handle_key_release(&KeyReleaseEvent::new(input, key, value))?;
        print_list(&typeahead)?;
    }

    // Clearing the input empties and hides the list again.
    println!("key {:?}, input \"\":", Key::Backspace);
    typeahead.handle_key_release(&KeyReleaseEvent::new(input, Key::Backspace, ""))?;
    print_list(&typeahead)?;

    Ok(())
}

fn print_list(typeahead: &Typeahead<MarkupList>) -> typeline::Result<()> {
    let surface = typeahead.surface();
    if !surface.is_visible() {
        println!("   (list hidden)");
        return Ok(());
    }
    for handle in surface.items()? {
        let marker = if surface.is_active(handle) { '>' } else { ' ' };
        println!("   {marker} {}", surface.item_markup(handle).unwrap_or(""));
    }
    Ok(())
}
