//! Plain-text PGM export.
//!
//! Writes the grid as an ASCII grayscale image (`P2`):
//!
//! ```text
//! P2
//! <width> <height>
//! 505
//! 0 505 505 ...
//! ```
//!
//! Cells holding 1 are drawn black (0), cells holding 0 at the light
//! intensity (505). One text line per grid row.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::SkinGrid;

/// Magic token for ASCII graymaps.
const MAGIC: &str = "P2";

/// Intensity for live cells.
pub const ON_INTENSITY: u16 = 0;

/// Intensity for dead cells; also the header's maximum value.
pub const OFF_INTENSITY: u16 = 505;

/// Errors from writing an image.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination file could not be created.
    #[error("failed to create PGM image {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing image data failed.
    #[error("failed to write PGM image: {0}")]
    Write(#[from] io::Error),
}

/// Serialize `grid` as PGM into `out`.
pub fn write_pgm<W: Write>(grid: &SkinGrid, out: &mut W) -> Result<(), ExportError> {
    let size = grid.size();
    writeln!(out, "{}", MAGIC)?;
    writeln!(out, "{} {}", size, size)?;
    writeln!(out, "{}", OFF_INTENSITY)?;

    for row in 0..size {
        let line = grid
            .row(row)
            .iter()
            .map(|&v| {
                let intensity = if v == 1 { ON_INTENSITY } else { OFF_INTENSITY };
                intensity.to_string()
            })
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

/// Write `grid` to `path`, creating or truncating the file.
pub fn save_pgm(grid: &SkinGrid, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_pgm(grid, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write `grid` to `<output_id>.pgm` and return the path written.
pub fn export(grid: &SkinGrid, output_id: &str) -> Result<PathBuf, ExportError> {
    let path = PathBuf::from(format!("{}.pgm", output_id));
    save_pgm(grid, &path)?;
    info!(path = %path.display(), "wrote PGM file");
    Ok(path)
}
