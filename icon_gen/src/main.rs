use std::env;
use std::fs;
use std::path::Path;

use lib_icon::constants::{BRAND_COLOR, ICONS_DIR};
use lib_icon::{generate_icon_set, IconError};
use log::info;

/// Writes the icon set into this crate's `icons/` directory. The location is
/// fixed at build time, so a binary moved elsewhere still targets it.
fn main() -> Result<(), IconError> {
    lib_icon::init_logging();

    // Outputs land next to the generator, wherever it is invoked from.
    let icons_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(ICONS_DIR);
    fs::create_dir_all(&icons_dir).map_err(|e| IconError::io(&icons_dir, e))?;
    env::set_current_dir(&icons_dir).map_err(|e| IconError::io(&icons_dir, e))?;
    info!("Working directory set to {}", icons_dir.display());

    generate_icon_set(Path::new("."), BRAND_COLOR, |file_name| {
        println!("Created {}", file_name)
    })?;
    println!("All icons created!");

    Ok(())
}
