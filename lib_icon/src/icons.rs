use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{error, info};
use thiserror::Error;

use crate::constants::{ICON_ALIASES, ICON_TARGETS};
use crate::image::encoder::{encode_solid, write, EncodingError};
use crate::image::format::ImageDescriptor;

#[derive(Error, Debug)]
pub enum IconError {
    #[error("Failed to encode {file_name}")]
    Encoding {
        file_name: &'static str,
        #[source]
        source: EncodingError,
    },
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IconError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        error!("IO error on {}: {}", path.display(), source);
        IconError::Io { path, source }
    }
}

/// Writes every icon target and alias into `dir`, in order.
///
/// `on_created` receives each file name right after the file is on disk.
/// The first failure stops the run; files written before it stay.
pub fn generate_icon_set<F>(
    dir: &Path,
    color: [u8; 4],
    mut on_created: F,
) -> Result<Vec<PathBuf>, IconError>
where
    F: FnMut(&str),
{
    info!("Generating icon set in {}", dir.display());
    let mut created = Vec::with_capacity(ICON_TARGETS.len() + ICON_ALIASES.len());

    for target in ICON_TARGETS {
        let descriptor = ImageDescriptor::square(target.size, color);
        let png = encode_solid(&descriptor).map_err(|source| {
            error!("Encoding {} failed: {}", target.file_name, source);
            IconError::Encoding {
                file_name: target.file_name,
                source,
            }
        })?;

        let path = dir.join(target.file_name);
        write(&path, &png).map_err(|e| IconError::io(&path, e))?;
        info!(
            "Created {} ({}x{}, {} bytes)",
            target.file_name,
            target.size,
            target.size,
            png.len()
        );
        on_created(target.file_name);
        created.push(path);
    }

    for alias in ICON_ALIASES {
        let source = dir.join(alias.source);
        let path = dir.join(alias.file_name);
        fs::copy(&source, &path).map_err(|e| IconError::io(&path, e))?;
        info!("Copied {} to {}", alias.source, alias.file_name);
        on_created(alias.file_name);
        created.push(path);
    }

    info!("Icon set complete: {} files", created.len());
    Ok(created)
}
