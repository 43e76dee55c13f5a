use crate::models::ProductRecord;
use crate::Error;
use csv::ReaderBuilder;
use log::warn;
use std::io::Cursor;

pub struct ProductRecordListPreprocessor {}

impl ProductRecordListPreprocessor {
    /// Parses a headerless `name,description` CSV document into product records.
    ///
    /// Rows without a usable name are skipped with a warning rather than
    /// aborting the whole dataset. Rows without a description column yield a
    /// record with an empty description.
    pub fn read_product_record_list_from_string(csv: &str) -> Result<Vec<ProductRecord>, Error> {
        let mut product_records = Vec::new();

        // Use a cursor to simulate a file reader from the string. The dataset
        // carries no header row, and rows may omit the description column.
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(Cursor::new(csv));

        for (row_index, record) in reader.records().enumerate() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            match ProductRecord::from_fields(record.get(0), record.get(1)) {
                Ok(product_record) => product_records.push(product_record),
                Err(err) => {
                    warn!("Skipping row {}: {}", row_index + 1, err);
                }
            }
        }

        Ok(product_records)
    }
}
