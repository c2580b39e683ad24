pub mod compression;
pub mod constants;
pub mod icons;
pub mod image;

use log::*;
use std::io::Write;

pub use crate::icons::{generate_icon_set, IconError};
pub use crate::image::format::{Image, ImageDescriptor};
pub use crate::image::{decode, encode, encode_solid, write};

pub fn init_logging() {
    logger_builder().init();
}

/// Logger used by `init_logging`: warnings and errors only, so a normal run
/// leaves the console to the generator's own output.
pub fn logger_builder() -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .target(env_logger::Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter(Some("lib_icon"), LevelFilter::Warn)
        .filter(Some("icon_gen"), LevelFilter::Warn)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        });
    builder
}
