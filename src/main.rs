mod builder;
mod models;
mod render;
mod utils;

use std::path::Path;

fn main() {
    // One-shot batch: render every launcher icon into app/src/main/res under
    // the current directory. Any filesystem failure aborts the whole run.
    if let Err(e) = builder::generate_icons(Path::new(".")) {
        eprintln!("icon generation failed: {}", e);
        std::process::exit(1);
    }
}
