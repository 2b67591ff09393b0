//! Headless Scroll Demo
//!
//! Drives a headless list through a scripted session of scrolling and
//! window resizes, printing each overflow change as edge shadows would
//! be toggled in a real UI.
//!
//! Run with: cargo run -p brink_overflow --example headless_scroll
//! Set RUST_LOG=brink_core=trace,brink_overflow=debug to watch the
//! debouncer coalesce events.

use std::rc::Rc;
use std::time::Duration;

use brink_core::EventLoop;
use brink_overflow::{OverflowOptions, OverflowTracker, Result};
use brink_platform::{HeadlessElement, HeadlessWindow, WindowConfig};
use tracing_subscriber::EnvFilter;

/// Overflow options, as they might ship in an app's config file
const OPTIONS: &str = r#"
trigger_on_init = true
debounce_ms = 100
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = OverflowOptions::from_toml_str(OPTIONS)?;

    let mut event_loop = EventLoop::manual();
    let window = HeadlessWindow::new(WindowConfig::new("Headless Scroll").size(480, 640));
    let list = Rc::new(HeadlessElement::new(480.0, 600.0).with_content_size(960.0, 2400.0));

    let tracker = OverflowTracker::attach(
        &list,
        &window,
        &event_loop.timers(),
        |list: &HeadlessElement, direction, overflowing| {
            let metrics = list.metrics();
            println!(
                "[{:>6.1},{:>6.1}] {:<5} shadow {}",
                metrics.scroll_left,
                metrics.scroll_top,
                direction,
                if overflowing { "on" } else { "off" }
            );
        },
        options,
    );

    println!("-- fling down");
    for _ in 0..30 {
        list.scroll_by(0.0, 40.0);
        event_loop.advance(Duration::from_millis(16));
    }
    event_loop.advance(options.debounce);

    println!("-- jump to the far corner");
    list.scroll_to_end();
    event_loop.advance(options.debounce);

    println!("-- window grows taller than the content");
    list.set_client_size(480.0, 2600.0);
    window.resize(480, 2640);
    event_loop.advance(options.debounce);

    println!("-- dispose");
    drop(tracker);
    list.scroll_to(0.0, 0.0);
    event_loop.advance(options.debounce);

    let stats = event_loop.stats();
    println!(
        "turns: {}, timers fired: {}, pending: {}",
        stats.turns, stats.timers_fired, stats.pending_timers
    );
    Ok(())
}
