use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{self, Curve};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while turning a measurement file into curves.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The matrix must be rectangular; NaN-pad rows at the source if the
    /// sweeps have differing lengths.
    #[error("{path}:{line}: expected {expected} columns, found {found}")]
    RaggedRow {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{path}:{line}: '{token}' is not a number")]
    BadNumber {
        path: PathBuf,
        line: usize,
        token: String,
    },

    #[error("{path}: rows have {found} columns, need at least {needed}")]
    TooFewColumns {
        path: PathBuf,
        needed: usize,
        found: usize,
    },
}

// ---------------------------------------------------------------------------
// Matrix loader
// ---------------------------------------------------------------------------

/// Load a whitespace-delimited numeric matrix, skipping one header line.
///
/// Blank lines are ignored. All data rows must have the same width. A file
/// with a single data row still comes back as a one-row matrix. Loading is
/// a pure function of the file contents.
pub fn load_matrix(path: &Path) -> Result<Vec<Vec<f64>>, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rows: Vec<Vec<f64>> = Vec::new();
    // Line numbers are 1-based; line 1 is the header.
    for (line_no, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let row: Vec<f64> = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| LoadError::BadNumber {
                    path: path.to_path_buf(),
                    line: line_no + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<_, _>>()?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(LoadError::RaggedRow {
                    path: path.to_path_buf(),
                    line: line_no + 1,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Per-variant curve loaders
// ---------------------------------------------------------------------------

fn require_width(
    matrix: &[Vec<f64>],
    path: &Path,
    needed: usize,
) -> Result<(), LoadError> {
    match matrix.first() {
        Some(row) if row.len() < needed => Err(LoadError::TooFewColumns {
            path: path.to_path_buf(),
            needed,
            found: row.len(),
        }),
        _ => Ok(()),
    }
}

/// Load a fall-transition sweep: one curve per input-slope row.
pub fn load_fall_transition(path: &Path) -> Result<Vec<Curve>, LoadError> {
    let matrix = load_matrix(path)?;
    require_width(&matrix, path, 1)?;
    Ok(matrix
        .iter()
        .filter_map(|row| model::decode_fall_transition(row))
        .collect())
}

/// Load a setup-exploration sweep: one curve per (slope, capacitance) row.
pub fn load_setup_explore(path: &Path) -> Result<Vec<Curve>, LoadError> {
    let matrix = load_matrix(path)?;
    require_width(&matrix, path, 2)?;
    Ok(matrix
        .iter()
        .filter_map(|row| model::decode_setup_explore(row))
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("sweepview-{name}-{}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn skips_header_and_blank_lines() {
        let path = temp_file(
            "header",
            "islope cap fall cap fall\n0.5 1.0 0.15 2.0 0.18\n\n1.0 1.0 0.20 2.0 0.24\n",
        );
        let matrix = load_matrix(&path).unwrap();
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix[0], vec![0.5, 1.0, 0.15, 2.0, 0.18]);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn single_row_stays_two_dimensional() {
        let path = temp_file("single", "header\n0.5 1.0 0.15\n");
        let matrix = load_matrix(&path).unwrap();
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix[0].len(), 3);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn loading_is_idempotent() {
        let path = temp_file("idem", "h\n0.5 1.0 0.15\n1.0 2.0 0.30\n");
        let a = load_matrix(&path).unwrap();
        let b = load_matrix(&path).unwrap();
        assert_eq!(a, b);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_names_the_path() {
        let path = Path::new("does/not/exist.dat");
        let err = load_matrix(path).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
        assert!(err.to_string().contains("does/not/exist.dat"));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let path = temp_file("ragged", "h\n0.5 1.0 0.15\n1.0 2.0\n");
        let err = load_matrix(&path).unwrap_err();
        match err {
            LoadError::RaggedRow { line, expected, found, .. } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn bad_token_is_reported_with_line() {
        let path = temp_file("badnum", "h\n0.5 oops 0.15\n");
        let err = load_matrix(&path).unwrap_err();
        match err {
            LoadError::BadNumber { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn nan_tokens_parse_and_filter_out() {
        // NaN-padded rows load fine; the decoder drops the padded pairs.
        let path = temp_file(
            "nanpad",
            "h\n0.5 2.0 100.0 0.02 200.0 0.03\n1.0 2.0 100.0 0.04 nan nan\n",
        );
        let curves = load_setup_explore(&path).unwrap();
        assert_eq!(curves.len(), 2);
        assert_eq!(curves[0].points.len(), 2);
        assert_eq!(curves[1].points.len(), 1);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn all_nan_row_is_skipped_silently() {
        let path = temp_file("allnan", "h\n0.5 2.0 nan nan\n1.0 2.0 100.0 0.04\n");
        let curves = load_setup_explore(&path).unwrap();
        assert_eq!(curves.len(), 1);
        assert_eq!(curves[0].label, "islope=1.000 ns, C=2.000 fF");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn too_narrow_setup_file_is_rejected() {
        let path = temp_file("narrow", "h\n0.5\n");
        let err = load_setup_explore(&path).unwrap_err();
        assert!(matches!(err, LoadError::TooFewColumns { needed: 2, .. }));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn empty_file_yields_no_curves() {
        let path = temp_file("empty", "header only\n");
        assert!(load_fall_transition(&path).unwrap().is_empty());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn row_count_is_data_driven() {
        // Three slope corners in, three curves out; nothing assumes a
        // fixed corner count.
        let path = temp_file(
            "corners",
            "h\n0.1 1.0 0.10\n0.2 1.0 0.12\n0.4 1.0 0.16\n",
        );
        let curves = load_fall_transition(&path).unwrap();
        assert_eq!(curves.len(), 3);
        assert_eq!(curves[2].label, "0.4");
        std::fs::remove_file(path).unwrap();
    }
}
