//! CSV file reading with every column kept as text.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::{Column, CsvReadOptions, DataFrame, SerReader};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::options::IngestOptions;

use super::header::normalize_header;

fn open_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers, which spreadsheet tools emit when a survey
/// is saved as "Unicode text".
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Rename every column to its normalized header text.
fn normalize_column_names(df: &DataFrame, path: &Path) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let name = normalize_header(column.name().as_str());
        if name.is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
            });
        }
        columns.push(column.clone().with_name(name.into()));
    }
    Ok(DataFrame::new(columns)?)
}

/// Reads a survey export into a DataFrame with one text column per header.
///
/// Schema inference is disabled, so a column holding only digits (a college
/// term, say) stays a string column. An export with a header row and no
/// responses loads as an empty frame.
pub fn read_survey_csv(path: &Path, options: &IngestOptions) -> Result<DataFrame> {
    validate_encoding(path)?;

    let separator = options.separator;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|parse| parse.with_separator(separator))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let df = if options.normalize_headers {
        normalize_column_names(&df, path)?
    } else {
        df
    };

    if df.height() == 0 {
        warn!(path = %path.display(), "survey export has no responses");
    }
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded survey export"
    );

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_keeps_digits_as_text() {
        let file = create_temp_csv("Termo,Resposta\n7,Sim\n8,Não\n".as_bytes());
        let df = read_survey_csv(file.path(), &IngestOptions::default()).unwrap();

        assert_eq!(df.height(), 2);
        let term = df.column("Termo").unwrap();
        assert_eq!(term.dtype(), &DataType::String);
        assert_eq!(term.str().unwrap().get(0), Some("7"));
        assert_eq!(
            df.column("Resposta").unwrap().str().unwrap().get(1),
            Some("Não")
        );
    }

    #[test]
    fn test_read_normalizes_headers() {
        let file = create_temp_csv("\u{feff}Carimbo de data/hora ,  Pratico  atividades\nx,y\n".as_bytes());
        let df = read_survey_csv(file.path(), &IngestOptions::default()).unwrap();

        assert!(df.column("Carimbo de data/hora").is_ok());
        assert!(df.column("Pratico atividades").is_ok());
    }

    #[test]
    fn test_read_keeps_raw_headers_when_disabled() {
        let file = create_temp_csv("Carimbo de data/hora ,  Pratico  atividades\nx,y\n".as_bytes());
        let options = IngestOptions::new().with_normalize_headers(false);
        let df = read_survey_csv(file.path(), &options).unwrap();

        assert!(df.column("Carimbo de data/hora ").is_ok());
        assert!(df.column("  Pratico  atividades").is_ok());
        assert!(df.column("Carimbo de data/hora").is_err());
    }

    #[test]
    fn test_read_with_semicolon_separator() {
        let file = create_temp_csv("A;B\n\"1, 2\";3\n".as_bytes());
        let options = IngestOptions::default().with_separator(b';');
        let df = read_survey_csv(file.path(), &options).unwrap();

        assert_eq!(df.width(), 2);
        assert_eq!(df.column("A").unwrap().str().unwrap().get(0), Some("1, 2"));
    }

    #[test]
    fn test_read_header_only() {
        let file = create_temp_csv(b"A,B\n");
        let df = read_survey_csv(file.path(), &IngestOptions::default()).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn test_rejects_utf16() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'A', 0x00]);
        let err = read_survey_csv(file.path(), &IngestOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedEncoding { .. }));
    }

    #[test]
    fn test_rejects_empty_file() {
        let file = create_temp_csv(b"");
        let err = read_survey_csv(file.path(), &IngestOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::EmptyCsv { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = read_survey_csv(
            Path::new("/nonexistent/respostas.csv"),
            &IngestOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
