use crate::errors::{AppError, AppResult};
use crate::models::{LogRecord, LogTable};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Parse a CSV document into a typed table.
///
/// The header must carry every column in `R::REQUIRED_COLUMNS` (exact
/// names); other columns are ignored. One bad row rejects the document.
pub fn parse_csv<R: LogRecord>(bytes: &[u8]) -> AppResult<LogTable<R>> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);

    let headers = rdr.headers()?.clone();
    for col in R::REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *col) {
            return Err(AppError::MissingColumn((*col).to_string()));
        }
    }

    let mut records = Vec::new();
    let mut row = csv::StringRecord::new();
    while rdr.read_record(&mut row)? {
        // physical line where the row starts; quoted fields may span lines
        let line = row.position().map_or(0, |p| p.line());
        let record: R = row.deserialize(Some(&headers))?;
        record
            .validate()
            .map_err(|reason| AppError::InvalidRecord { line, reason })?;
        records.push(record);
    }

    Ok(LogTable::new(records))
}
