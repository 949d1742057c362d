//!
//! Output files of a run
//!
//! `<dir>/mat_<n>` holds the raw adjacency matrix and `<dir>/result_<n>` the
//! distance matrix. Both are first written to temporary files in `<dir>` and
//! renamed into place only when both are complete, so a failed run leaves no
//! partial output behind.
//!
//! `result_<n>` is renamed first. If that fails, nothing in `<dir>` has
//! changed. If the rename of `mat_<n>` fails afterwards, the new `result_<n>`
//! is removed again; a `mat_<n>` of an earlier run then stays without its
//! result, since the earlier `result_<n>` was already replaced.
//!
use crate::error::{Error, Result};
use crate::format::write_matrix;
use crate::matrix::{DistanceMatrix, RawMatrix, SquareMatrix};
use log::{debug, info, warn};
use std::fmt::Display;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

///
/// Paths of the files written by `write_outputs`
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub matrix: PathBuf,
    pub result: PathBuf,
}

impl OutputPaths {
    /// `<dir>/mat_<n>` and `<dir>/result_<n>`
    pub fn new(dir: &Path, n: usize) -> Self {
        OutputPaths {
            matrix: dir.join(format!("mat_{}", n)),
            result: dir.join(format!("result_{}", n)),
        }
    }
}

///
/// Write `matrix` into a new temporary file in `dir`.
/// `target` is only used to name the file in errors.
///
fn write_temp<T: Display>(
    dir: &Path,
    target: &Path,
    matrix: &SquareMatrix<T>,
) -> Result<NamedTempFile> {
    let file = NamedTempFile::new_in(dir).map_err(|e| Error::io(target, e))?;
    let mut out = BufWriter::new(file);
    write_matrix(&mut out, matrix).map_err(|e| Error::io(target, e))?;
    out.flush().map_err(|e| Error::io(target, e))?;
    let file = out
        .into_inner()
        .map_err(|e| Error::io(target, e.into_error()))?;
    debug!("wrote {} to {}", target.display(), file.path().display());
    Ok(file)
}

///
/// Write the raw matrix and the distance matrix into `dir`.
///
/// `dir` is created if missing. On error, no file of this run is left in
/// `dir`.
///
pub fn write_outputs<P: AsRef<Path>>(
    dir: P,
    raw: &RawMatrix,
    dist: &DistanceMatrix,
) -> Result<OutputPaths> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    let paths = OutputPaths::new(dir, raw.size());

    let matrix_file = write_temp(dir, &paths.matrix, raw)?;
    let result_file = write_temp(dir, &paths.result, dist)?;

    result_file
        .persist(&paths.result)
        .map_err(|e| Error::io(&paths.result, e.error))?;
    if let Err(e) = matrix_file.persist(&paths.matrix) {
        if let Err(cleanup) = fs::remove_file(&paths.result) {
            warn!("could not remove {}: {}", paths.result.display(), cleanup);
        }
        return Err(Error::io(&paths.matrix, e.error));
    }

    info!(
        "wrote {} and {}",
        paths.matrix.display(),
        paths.result.display()
    );
    Ok(paths)
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floyd::floyd_warshall;
    use crate::transform::transform;

    fn chain() -> (RawMatrix, DistanceMatrix) {
        let raw = RawMatrix::from_rows(vec![vec![0, 5, 0], vec![0, 0, 3], vec![0, 0, 0]]).unwrap();
        let dist = floyd_warshall(&transform(&raw)).unwrap();
        (raw, dist)
    }

    #[test]
    fn output_paths() {
        let paths = OutputPaths::new(Path::new("data"), 12);
        assert_eq!(paths.matrix, PathBuf::from("data/mat_12"));
        assert_eq!(paths.result, PathBuf::from("data/result_12"));
    }

    #[test]
    fn write_outputs_01() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("data");
        let (raw, dist) = chain();

        let paths = write_outputs(&dir, &raw, &dist).unwrap();
        assert_eq!(paths, OutputPaths::new(&dir, 3));
        assert_eq!(
            fs::read_to_string(&paths.matrix).unwrap(),
            "0 5 0  \n0 0 3  \n0 0 0  \n"
        );
        assert_eq!(
            fs::read_to_string(&paths.result).unwrap(),
            "0 5 8  \ni 0 3  \ni i 0  \n"
        );
        // no temporary files left over
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 2);
    }

    #[test]
    fn write_outputs_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let (raw, dist) = chain();
        fs::write(tmp.path().join("mat_3"), "old").unwrap();
        let paths = write_outputs(tmp.path(), &raw, &dist).unwrap();
        assert_eq!(
            fs::read_to_string(&paths.matrix).unwrap(),
            "0 5 0  \n0 0 3  \n0 0 0  \n"
        );
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn write_outputs_result_rename_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let (raw, dist) = chain();
        // a directory where result_3 should go
        fs::create_dir(tmp.path().join("result_3")).unwrap();

        let e = write_outputs(tmp.path(), &raw, &dist).unwrap_err();
        println!("{}", e);
        assert!(matches!(e, Error::Io { .. }));
        assert!(e.to_string().contains("result_3"));
        assert_eq!(entries(tmp.path()), vec!["result_3"]);
    }

    #[test]
    fn write_outputs_result_rename_fails_keeps_previous_matrix() {
        let tmp = tempfile::tempdir().unwrap();
        let (raw, dist) = chain();
        fs::write(tmp.path().join("mat_3"), "old").unwrap();
        fs::create_dir(tmp.path().join("result_3")).unwrap();

        let e = write_outputs(tmp.path(), &raw, &dist).unwrap_err();
        assert!(e.to_string().contains("result_3"));
        assert_eq!(fs::read_to_string(tmp.path().join("mat_3")).unwrap(), "old");
        assert_eq!(entries(tmp.path()), vec!["mat_3", "result_3"]);
    }

    #[test]
    fn write_outputs_matrix_rename_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let (raw, dist) = chain();
        // result_3 gets renamed into place, then mat_3 fails
        fs::create_dir(tmp.path().join("mat_3")).unwrap();

        let e = write_outputs(tmp.path(), &raw, &dist).unwrap_err();
        println!("{}", e);
        assert!(matches!(e, Error::Io { .. }));
        assert!(e.to_string().contains("mat_3"));
        // the new result_3 was removed again, no temporary files remain
        assert_eq!(entries(tmp.path()), vec!["mat_3"]);
    }

    #[test]
    fn write_outputs_fails_without_partial_files() {
        let tmp = tempfile::tempdir().unwrap();
        // a regular file where the output directory should be
        let blocker = tmp.path().join("data");
        fs::write(&blocker, "").unwrap();
        let (raw, dist) = chain();

        let e = write_outputs(&blocker, &raw, &dist).unwrap_err();
        println!("{}", e);
        assert!(matches!(e, Error::Io { .. }));
        assert!(e.to_string().contains("data"));
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }
}
