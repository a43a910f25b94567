// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Error, Metric};

use csv::{ReaderBuilder, Trim};
use strum::IntoEnumIterator;

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A performance log loaded into memory.
///
/// Every column of the source is kept, with cells that are empty or not
/// numeric stored as `None`. The required metrics are validated at load time
/// and are also held as dense sample sequences.
#[derive(Clone, Debug)]
pub struct Table {
    headers: Vec<String>,
    columns: HashMap<String, Vec<Option<f64>>>,
    samples: BTreeMap<Metric, Vec<f64>>,
    rows: usize,
}

impl Table {
    /// Load a table from a comma-separated file with a header row.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|source| Error::MissingSource {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, path)
    }

    /// Load a table from any reader. `origin` is only used in error messages.
    pub fn from_reader<R: Read>(reader: R, origin: &Path) -> Result<Self, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| Error::from_csv(origin, e))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        // check the schema before reading any samples, duplicate headers
        // resolve to the first occurrence
        let mut required = Vec::new();
        for metric in Metric::iter() {
            match headers.iter().position(|h| h == metric.column()) {
                Some(idx) => required.push((metric, idx)),
                None => return Err(Error::MissingColumn(metric.column().to_string())),
            }
        }

        let mut values: Vec<Vec<Option<f64>>> = vec![Vec::new(); headers.len()];
        let mut samples: BTreeMap<Metric, Vec<f64>> = BTreeMap::new();
        let mut rows = 0;

        for record in reader.records() {
            let record = record.map_err(|e| Error::from_csv(origin, e))?;
            rows += 1;
            for (idx, cell) in record.iter().enumerate() {
                values[idx].push(parse_cell(cell));
            }
            for (metric, idx) in &required {
                let value = values[*idx][rows - 1].ok_or_else(|| Error::InvalidValue {
                    column: metric.column().to_string(),
                    row: rows,
                    value: record.get(*idx).unwrap_or_default().to_string(),
                })?;
                samples.entry(*metric).or_default().push(value);
            }
        }

        if rows == 0 {
            return Err(Error::EmptyTable);
        }

        let mut columns = HashMap::new();
        for (name, column) in headers.iter().zip(values.into_iter()) {
            columns.entry(name.clone()).or_insert(column);
        }

        debug!(
            "loaded {} rows with {} columns from {}",
            rows,
            headers.len(),
            origin.display()
        );

        Ok(Self {
            headers,
            columns,
            samples,
            rows,
        })
    }

    /// Number of data rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column names in source order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Any column by name, with missing cells as `None`.
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// The sample sequence of a required metric, in row order.
    pub fn samples(&self, metric: Metric) -> &[f64] {
        self.samples
            .get(&metric)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn parse_cell(cell: &str) -> Option<f64> {
    if cell.is_empty() {
        return None;
    }
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}
