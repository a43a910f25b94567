// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Broad category of a pipeline failure.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// The source file could not be opened or read
    MissingSource,
    /// The source table does not have the expected shape or content
    Schema,
    /// An artifact could not be written
    RenderFailure,
    /// The configuration could not be loaded or is incomplete
    Config,
}

impl ErrorKind {
    /// Process exit status used by the binary for this kind of failure.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::MissingSource => 2,
            Self::Schema => 3,
            Self::RenderFailure => 4,
            Self::Config => 5,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to read source {}: {source}", path.display())]
    MissingSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Column '{0}' not found in CSV file.")]
    MissingColumn(String),
    #[error("column '{column}' has invalid value {value:?} at row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },
    #[error("source table has no samples")]
    EmptyTable,
    #[error("malformed table: {0}")]
    Malformed(String),
    #[error("failed to render {}: {detail}", path.display())]
    Render { path: PathBuf, detail: String },
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingSource { .. } => ErrorKind::MissingSource,
            Self::MissingColumn(_)
            | Self::InvalidValue { .. }
            | Self::EmptyTable
            | Self::Malformed(_) => ErrorKind::Schema,
            Self::Render { .. } => ErrorKind::RenderFailure,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    pub(crate) fn render(path: &Path, detail: impl ToString) -> Self {
        Self::Render {
            path: path.to_path_buf(),
            detail: detail.to_string(),
        }
    }

    pub(crate) fn from_csv(path: &Path, e: csv::Error) -> Self {
        let detail = e.to_string();
        match e.into_kind() {
            csv::ErrorKind::Io(source) => Self::MissingSource {
                path: path.to_path_buf(),
                source,
            },
            _ => Self::Malformed(detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            Error::MissingColumn("Framerate".to_string()).kind(),
            ErrorKind::Schema
        );
        assert_eq!(Error::EmptyTable.kind(), ErrorKind::Schema);
        assert_eq!(
            Error::render(Path::new("out/a.png"), "boom").kind(),
            ErrorKind::RenderFailure
        );
        assert_eq!(
            Error::Config("no source".to_string()).kind(),
            ErrorKind::Config
        );
    }

    #[test]
    fn missing_column_message() {
        let e = Error::MissingColumn("RAM usage".to_string());
        assert_eq!(e.to_string(), "Column 'RAM usage' not found in CSV file.");
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            ErrorKind::MissingSource.exit_code(),
            ErrorKind::Schema.exit_code(),
            ErrorKind::RenderFailure.exit_code(),
            ErrorKind::Config.exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, 0);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
