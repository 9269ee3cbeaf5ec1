//! Matrix-pair file loading
//!
//! A pair file holds two integer matrices as whitespace-separated rows,
//! with the first blank line separating `A` from `B`. Under the `mmap`
//! feature the file is memory mapped instead of read into a buffer.

use std::fs::File;
use std::path::Path;

use algolab_core::{parse_matrix_pair, Matrix};
use tracing::debug;

use crate::Result;

/// Load and parse a matrix pair from `path`
///
/// Both matrices must be rectangular and non-empty; shape compatibility
/// for a product is left to the multiplier.
pub fn load_matrix_pair<P: AsRef<Path>>(path: P) -> Result<(Matrix<i64>, Matrix<i64>)> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let len = file.metadata()?.len();

    let (a, b) = if len == 0 {
        parse_matrix_pair("")?
    } else {
        parse_mapped(&file)?
    };

    debug!(
        path = %path.display(),
        bytes = len,
        a = ?a.dimensions(),
        b = ?b.dimensions(),
        "loaded matrix pair"
    );
    Ok((a, b))
}

#[cfg(feature = "mmap")]
fn parse_mapped(file: &File) -> Result<(Matrix<i64>, Matrix<i64>)> {
    // SAFETY: read-only mapping; the map is dropped before this returns
    let mmap = unsafe { memmap2::MmapOptions::new().map(file)? };
    let text = std::str::from_utf8(&mmap)?;
    Ok(parse_matrix_pair(text)?)
}

#[cfg(not(feature = "mmap"))]
fn parse_mapped(mut file: &File) -> Result<(Matrix<i64>, Matrix<i64>)> {
    use std::io::Read;

    let mut text = String::new();
    file.read_to_string(&mut text)?;
    Ok(parse_matrix_pair(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algolab_core::LabError;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("algolab-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_pair() {
        let path = write_temp("pair.tsv", "1\t2\n3\t4\n\n5 6\n7 8\n");
        let (a, b) = load_matrix_pair(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(a.to_rows(), vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(b.to_rows(), vec![vec![5, 6], vec![7, 8]]);
    }

    #[test]
    fn test_load_errors() {
        let path = write_temp("bad.tsv", "1 2\n3 x\n\n1\n");
        let err = load_matrix_pair(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, crate::Error::Lab(LabError::InvalidNumber)));

        let path = write_temp("empty.tsv", "");
        let err = load_matrix_pair(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, crate::Error::Lab(LabError::EmptyMatrix)));

        assert!(matches!(
            load_matrix_pair("/nonexistent/algolab/pair.tsv"),
            Err(crate::Error::Io(_))
        ));
    }
}
