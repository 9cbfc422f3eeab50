//! Dump the on-disk chordkit state for debugging.
//!
//! Prints settings, applications, and shortcut lists from the data
//! directory. Run with: `cargo run --bin chordkit-inspect`

use anyhow::Result;

use chordkit::config;
use chordkit::logging;
use chordkit::shortcuts::ShortcutStore;

fn main() -> Result<()> {
    let _guard = logging::init();

    let settings = config::load_settings();
    println!("settings path: {}", config::default_settings_path().display());
    println!("  global_hotkey:  {}", settings.global_hotkey);
    println!("  always_on_top:  {}", settings.always_on_top);
    println!("  run_on_startup: {}", settings.run_on_startup);

    let store = ShortcutStore::open_default();
    println!("data dir: {}", store.dir().display());

    let apps = store.load_applications()?;
    println!("{} application(s)", apps.len());
    for app in &apps {
        println!("  {} ({})", app.name, app.process_name);
    }

    let lists = store.load_lists()?;
    println!("{} shortcut list(s)", lists.len());
    for list in &lists {
        println!("  {} [app: {}]", list.name, list.application_id);
        for shortcut in list.sorted_shortcuts() {
            println!("    {:<24} {}", shortcut.key_combo, shortcut.description);
        }
    }

    Ok(())
}
