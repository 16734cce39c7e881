//! Delimited file reader with type inference and numeric coercion

use crate::reader::{BadLinePolicy, IoError, IoResult, LoadOptions};
use crate::schema::{Column, ColumnData, ColumnType};
use crate::table::Table;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads delimited text into a [`Table`]
#[derive(Debug, Clone, Default)]
pub struct CsvReader {
    options: LoadOptions,
}

impl CsvReader {
    /// Create a reader with the given options
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Read a file from disk
    pub fn read_path(&self, path: impl AsRef<Path>) -> IoResult<Table> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        tracing::debug!("Reading {:?}", path);
        self.read(BufReader::new(file))
    }

    /// Read from an in-memory string
    pub fn read_str(&self, input: &str) -> IoResult<Table> {
        self.read(input.as_bytes())
    }

    /// Read from any byte source
    pub fn read<R: Read>(&self, source: R) -> IoResult<Table> {
        self.options.validate()?;
        let delimiter = self
            .options
            .delimiter_byte()
            .ok_or_else(|| IoError::InvalidFormat("delimiter must be ASCII".to_string()))?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let raw_headers = reader.headers().map_err(csv_error)?.clone();
        if raw_headers.is_empty() {
            return Err(IoError::EmptyInput);
        }
        let headers = dedupe_headers(raw_headers.iter());

        for name in &self.options.numeric_columns {
            if !headers.iter().any(|h| h == name) {
                return Err(IoError::ColumnNotFound(name.clone()));
            }
        }

        let num_columns = headers.len();
        let mut raw_columns: Vec<Vec<Option<String>>> = vec![Vec::new(); num_columns];
        let mut skipped = 0usize;

        for result in reader.records() {
            let record = result.map_err(csv_error)?;
            if is_blank_line(&record) {
                continue;
            }
            if record.len() > num_columns {
                let line = record.position().map_or(0, |p| p.line());
                match self.options.on_bad_lines {
                    BadLinePolicy::Error => {
                        return Err(IoError::MalformedRow {
                            line,
                            expected: num_columns,
                            found: record.len(),
                        });
                    }
                    BadLinePolicy::Warn => {
                        tracing::warn!(
                            "Skipping line {}: expected {} fields, saw {}",
                            line,
                            num_columns,
                            record.len()
                        );
                    }
                    BadLinePolicy::Skip => {}
                }
                skipped += 1;
                continue;
            }

            // Short rows are padded with missing values
            for (i, column) in raw_columns.iter_mut().enumerate() {
                let value = record
                    .get(i)
                    .filter(|field| !self.options.is_missing_token(field))
                    .map(str::to_string);
                column.push(value);
            }
        }

        let decimal = self.options.decimal;
        let columns: Vec<Column> = headers
            .into_iter()
            .zip(raw_columns)
            .map(|(name, values)| {
                let data = parse_column(values, decimal);
                let data = if self.options.numeric_columns.contains(&name) {
                    coerce_numeric(data, decimal)
                } else {
                    data
                };
                Column::new(name, data)
            })
            .collect();

        let table = Table::new(columns)
            .ok_or_else(|| IoError::InvalidFormat("columns differ in length".to_string()))?;

        tracing::info!(
            "Loaded {} rows x {} columns ({} malformed rows skipped)",
            table.num_rows(),
            table.num_columns(),
            skipped
        );
        Ok(table)
    }
}

fn csv_error(e: csv::Error) -> IoError {
    if e.is_io_error() {
        IoError::Io(e.to_string())
    } else {
        IoError::InvalidFormat(e.to_string())
    }
}

/// A line holding nothing but whitespace, with no delimiter
fn is_blank_line(record: &csv::StringRecord) -> bool {
    record.len() == 1 && record[0].trim().is_empty()
}

/// Make header names unique by suffixing repeats with `.1`, `.2`, ...
fn dedupe_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    let mut headers = Vec::new();

    for name in raw {
        let mut candidate = name.to_string();
        let mut suffix = 1;
        while used.contains(&candidate) {
            candidate = format!("{}.{}", name, suffix);
            suffix += 1;
        }
        used.insert(candidate.clone());
        headers.push(candidate);
    }

    headers
}

/// Infer column type from its values
///
/// Integers with missing entries widen to `Float64`; booleans with missing
/// entries fall back to `String`. An all-missing column is `Float64`.
fn infer_type(values: &[Option<String>], decimal: char) -> ColumnType {
    let present: Vec<&str> = values.iter().flatten().map(String::as_str).collect();
    if present.is_empty() {
        return ColumnType::Float64;
    }
    let has_missing = present.len() < values.len();

    if present.iter().all(|s| parse_int(s).is_some()) {
        return if has_missing {
            ColumnType::Float64
        } else {
            ColumnType::Int64
        };
    }

    if present.iter().all(|s| parse_float(s, decimal).is_some()) {
        return ColumnType::Float64;
    }

    if !has_missing && present.iter().all(|s| parse_bool(s).is_some()) {
        return ColumnType::Bool;
    }

    ColumnType::String
}

/// Parse raw values into typed column data
fn parse_column(values: Vec<Option<String>>, decimal: char) -> ColumnData {
    match infer_type(&values, decimal) {
        ColumnType::Int64 => ColumnData::Int64(
            values
                .iter()
                .map(|v| v.as_deref().and_then(parse_int))
                .collect(),
        ),
        ColumnType::Float64 => ColumnData::Float64(
            values
                .iter()
                .map(|v| v.as_deref().and_then(|s| parse_float(s, decimal)))
                .collect(),
        ),
        ColumnType::Bool => ColumnData::Bool(
            values
                .iter()
                .map(|v| v.as_deref().and_then(parse_bool))
                .collect(),
        ),
        ColumnType::String => ColumnData::String(values),
    }
}

/// Coerce a column to a numeric type
///
/// Values that do not parse become missing. Strings become `Int64` only
/// when every value is present and integral.
fn coerce_numeric(data: ColumnData, decimal: char) -> ColumnData {
    match data {
        ColumnData::Int64(_) | ColumnData::Float64(_) => data,
        ColumnData::Bool(values) => {
            ColumnData::Int64(values.into_iter().map(|v| v.map(i64::from)).collect())
        }
        ColumnData::String(values) => {
            let ints: Option<Vec<i64>> = values
                .iter()
                .map(|v| v.as_deref().and_then(parse_int))
                .collect();
            match ints {
                Some(ints) => ColumnData::Int64(ints.into_iter().map(Some).collect()),
                None => ColumnData::Float64(
                    values
                        .iter()
                        .map(|v| v.as_deref().and_then(|s| parse_float(s, decimal)))
                        .collect(),
                ),
            }
        }
    }
}

fn parse_int(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}

/// Parse a float honouring the decimal marker; NaN counts as unparseable
fn parse_float(s: &str, decimal: char) -> Option<f64> {
    let s = s.trim();
    let parsed = if decimal == '.' {
        s.parse::<f64>().ok()
    } else if s.contains('.') {
        None
    } else {
        s.replace(decimal, ".").parse::<f64>().ok()
    };
    parsed.filter(|x| !x.is_nan())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "True" | "true" | "TRUE" => Some(true),
        "False" | "false" | "FALSE" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Log sink shared between a test and its subscriber
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SharedBuffer {
        type Writer = SharedBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    const HEADER: &str = "Acc_x;Acc_y;Acc_z;Gyro_x;Gyro_y;Gyro_z;Set;ID";

    fn reader() -> CsvReader {
        CsvReader::new(LoadOptions::default())
    }

    fn values(table: &Table, name: &str) -> Vec<Option<f64>> {
        match table.data(name).unwrap() {
            ColumnData::Float64(v) => v.clone(),
            ColumnData::Int64(v) => v.iter().map(|x| x.map(|x| x as f64)).collect(),
            other => panic!("unexpected column type {:?}", other.dtype()),
        }
    }

    #[test]
    fn test_infer_type_int() {
        let values = vec![Some("1".to_string()), Some("2".to_string())];
        assert_eq!(infer_type(&values, '.'), ColumnType::Int64);
    }

    #[test]
    fn test_infer_type_int_with_missing_widens() {
        let values = vec![Some("1".to_string()), None];
        assert_eq!(infer_type(&values, '.'), ColumnType::Float64);
    }

    #[test]
    fn test_infer_type_float() {
        let values = vec![Some("1.5".to_string()), Some("2".to_string())];
        assert_eq!(infer_type(&values, '.'), ColumnType::Float64);
    }

    #[test]
    fn test_infer_type_bool_and_string() {
        let bools = vec![Some("True".to_string()), Some("false".to_string())];
        assert_eq!(infer_type(&bools, '.'), ColumnType::Bool);

        let text = vec![Some("walk".to_string()), Some("1".to_string())];
        assert_eq!(infer_type(&text, '.'), ColumnType::String);
    }

    #[test]
    fn test_parse_float_decimal_comma() {
        assert_eq!(parse_float("1,5", ','), Some(1.5));
        assert_eq!(parse_float("1.5", ','), None);
        assert_eq!(parse_float(" 2.25 ", '.'), Some(2.25));
        assert_eq!(parse_float("NaN", '.'), None);
    }

    #[test]
    fn test_dedupe_headers() {
        let headers = dedupe_headers(["a", "b", "a", "a"].into_iter());
        assert_eq!(headers, vec!["a", "b", "a.1", "a.2"]);
    }

    #[test]
    fn test_read_basic() {
        let input = format!(
            "{}\n0.1;0.2;0.3;1;2;3;1;a\n0.5;NA;0.7;4;5;6;2;b\n",
            HEADER
        );
        let table = reader().read_str(&input).unwrap();

        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.num_columns(), 8);
        assert_eq!(table.column("Acc_x").unwrap().dtype(), ColumnType::Float64);
        assert_eq!(table.column("Gyro_x").unwrap().dtype(), ColumnType::Int64);
        assert_eq!(table.column("ID").unwrap().dtype(), ColumnType::String);
        assert_eq!(values(&table, "Acc_y"), vec![Some(0.2), None]);
    }

    #[test]
    fn test_non_numeric_values_become_missing() {
        let input = format!(
            "{}\nabc;1;1;1;1;1;1;1\n2.5;1;1;1;1;1;1;2\n;1;1;1;1;1;1;3\n",
            HEADER
        );
        let table = reader().read_str(&input).unwrap();

        assert_eq!(table.column("Acc_x").unwrap().dtype(), ColumnType::Float64);
        assert_eq!(values(&table, "Acc_x"), vec![None, Some(2.5), None]);
        assert_eq!(table.column("ID").unwrap().dtype(), ColumnType::Int64);
    }

    #[test]
    fn test_whitespace_token_is_missing() {
        let input = format!("{}\n ;1;1;1;1;1;1;x\n", HEADER);
        let table = reader().read_str(&input).unwrap();
        assert_eq!(values(&table, "Acc_x"), vec![None]);
    }

    #[test]
    fn test_long_row_skipped_with_warn() {
        let input = format!(
            "{}\n1;1;1;1;1;1;1;1\n2;2;2;2;2;2;2;2;extra\n3;3;3;3;3;3;3;3\n",
            HEADER
        );
        let table = reader().read_str(&input).unwrap();
        assert_eq!(table.num_rows(), 2);
        assert_eq!(values(&table, "Acc_x"), vec![Some(1.0), Some(3.0)]);
    }

    #[test]
    fn test_whitespace_only_lines_ignored() {
        let input = format!("{}\n   \n1;1;1;1;1;1;1;1\n\n\t\n2;2;2;2;2;2;2;2\n", HEADER);
        let table = reader().read_str(&input).unwrap();
        assert_eq!(table.num_rows(), 2);
        assert_eq!(values(&table, "Acc_x"), vec![Some(1.0), Some(2.0)]);
        assert_eq!(table.data("ID").unwrap().missing_count(), 0);
    }

    #[test]
    fn test_empty_fields_row_kept() {
        let input = format!("{}\n;;;;;;;\n1;1;1;1;1;1;1;1\n", HEADER);
        let table = reader().read_str(&input).unwrap();
        assert_eq!(table.num_rows(), 2);
        assert_eq!(values(&table, "Acc_x"), vec![None, Some(1.0)]);
    }

    #[test]
    fn test_long_row_skipped_silently_with_skip_policy() {
        let input = format!(
            "{}\n1;1;1;1;1;1;1;1;extra\n3;3;3;3;3;3;3;3\n",
            HEADER
        );
        let logs = SharedBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();
        let quiet = CsvReader::new(LoadOptions::default().with_bad_lines(BadLinePolicy::Skip));

        let table =
            tracing::subscriber::with_default(subscriber, || quiet.read_str(&input)).unwrap();

        assert_eq!(table.num_rows(), 1);
        assert_eq!(values(&table, "Acc_x"), vec![Some(3.0)]);
        assert!(!logs.contents().contains("Skipping line"));
    }

    #[test]
    fn test_long_row_logs_warning_with_warn_policy() {
        let input = format!(
            "{}\n1;1;1;1;1;1;1;1\n2;2;2;2;2;2;2;2;extra\n",
            HEADER
        );
        let logs = SharedBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();

        let table =
            tracing::subscriber::with_default(subscriber, || reader().read_str(&input)).unwrap();

        assert_eq!(table.num_rows(), 1);
        let text = logs.contents();
        assert!(text.contains("WARN"));
        assert!(text.contains("Skipping line 3: expected 8 fields, saw 9"));
    }

    #[test]
    fn test_long_row_errors_with_error_policy() {
        let input = format!("{}\n1;1;1;1;1;1;1;1;9\n", HEADER);
        let strict = CsvReader::new(LoadOptions::default().with_bad_lines(BadLinePolicy::Error));
        let err = strict.read_str(&input).unwrap_err();
        assert!(matches!(
            err,
            IoError::MalformedRow {
                expected: 8,
                found: 9,
                ..
            }
        ));
    }

    #[test]
    fn test_short_row_padded() {
        let input = format!("{}\n1;2;3\n", HEADER);
        let table = reader().read_str(&input).unwrap();
        assert_eq!(table.num_rows(), 1);
        assert_eq!(values(&table, "Acc_z"), vec![Some(3.0)]);
        assert_eq!(values(&table, "Set"), vec![None]);
        assert!(table.data("ID").unwrap().is_missing(0));
    }

    #[test]
    fn test_missing_numeric_column_fails() {
        let err = reader().read_str("Acc_x;ID\n1;2\n").unwrap_err();
        assert!(matches!(err, IoError::ColumnNotFound(ref c) if c == "Acc_y"));
    }

    #[test]
    fn test_empty_input_fails() {
        let err = reader().read_str("").unwrap_err();
        assert!(matches!(err, IoError::EmptyInput));
    }

    #[test]
    fn test_bool_column_coerced_to_int() {
        let options = LoadOptions::default().with_numeric_columns(["flag"]);
        let table = CsvReader::new(options)
            .read_str("flag;name\nTrue;a\nFalse;b\n")
            .unwrap();
        assert_eq!(
            table.data("flag").unwrap(),
            &ColumnData::Int64(vec![Some(1), Some(0)])
        );
        assert_eq!(table.column("name").unwrap().dtype(), ColumnType::String);
    }

    #[test]
    fn test_read_path_missing_file() {
        let err = reader().read_path("/nonexistent/DatasetExos.csv").unwrap_err();
        assert!(matches!(err, IoError::FileNotFound(_)));
    }

    #[test]
    fn test_read_path_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "1.0;2.0;3.0;4.0;5.0;6.0;1;7").unwrap();
        file.flush().unwrap();

        let table = crate::load_table(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(table.num_rows(), 1);
        assert_eq!(values(&table, "Gyro_z"), vec![Some(6.0)]);
    }
}
