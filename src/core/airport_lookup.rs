use crate::domain::model::AirportRecord;
use crate::utils::error::{ItineraryError, Result};
use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

/// Logical columns every airport lookup must provide, in any order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "name",
    "iso_country",
    "municipality",
    "icao_code",
    "iata_code",
    "coordinates",
];

/// Positions of the required columns inside a concrete header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    name: usize,
    iso_country: usize,
    municipality: usize,
    icao_code: usize,
    iata_code: usize,
    coordinates: usize,
}

impl ColumnIndex {
    fn from_header<S: AsRef<str>>(header: &[S]) -> Result<Self> {
        let mut positions: HashMap<String, usize> = HashMap::new();
        for (i, column) in header.iter().enumerate() {
            positions.insert(column.as_ref().trim().to_lowercase(), i);
        }

        let mut found = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, column) in found.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = positions
                .get(column)
                .copied()
                .ok_or_else(|| ItineraryError::SchemaError {
                    column: column.to_string(),
                })?;
        }

        // 順序與 REQUIRED_COLUMNS 相同
        let [name, iso_country, municipality, icao_code, iata_code, coordinates] = found;
        Ok(Self {
            name,
            iso_country,
            municipality,
            icao_code,
            iata_code,
            coordinates,
        })
    }
}

/// Read-only airport table keyed by IATA and ICAO codes.
///
/// Both codes of one row point at the same `Arc<AirportRecord>`.
#[derive(Debug, Clone, Default)]
pub struct AirportDirectory {
    airports: HashMap<String, Arc<AirportRecord>>,
    record_count: usize,
}

impl AirportDirectory {
    /// Builds the directory from a header row and data rows.
    ///
    /// Aborts on the first malformed row; no partial directory is returned.
    /// Rows with zero fields are skipped.
    pub fn from_rows<S, R, I>(header: &[S], rows: I) -> Result<Self>
    where
        S: AsRef<str>,
        R: AsRef<[String]>,
        I: IntoIterator<Item = R>,
    {
        let columns = ColumnIndex::from_header(header)?;
        let mut directory = Self::default();

        for (i, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            // header 是第 1 行
            let line = i + 2;

            if row.is_empty() {
                continue;
            }
            if row.len() != header.len() {
                return Err(ItineraryError::RecordError {
                    line,
                    reason: format!("expected {} fields, found {}", header.len(), row.len()),
                });
            }

            // 欄位前後空白一律去掉，兩種輸出才會一致
            let field = |index: usize| row[index].trim().to_string();
            let record = AirportRecord {
                name: field(columns.name),
                iso_country: field(columns.iso_country),
                municipality: field(columns.municipality),
                icao_code: field(columns.icao_code),
                iata_code: field(columns.iata_code),
                coordinates: field(columns.coordinates),
            };

            if record.name.is_empty() {
                return Err(ItineraryError::RecordError {
                    line,
                    reason: "empty name".to_string(),
                });
            }
            if record.iata_code.is_empty() && record.icao_code.is_empty() {
                return Err(ItineraryError::RecordError {
                    line,
                    reason: "record has no IATA or ICAO code".to_string(),
                });
            }

            directory.insert(Arc::new(record));
        }

        tracing::debug!(
            "Loaded {} airports ({} codes)",
            directory.record_count,
            directory.airports.len()
        );
        Ok(directory)
    }

    /// Builds the directory from CSV text whose first record is the header.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = csv_reader.records();
        let header: Vec<String> = match records.next() {
            Some(header) => header?.iter().map(str::to_string).collect(),
            None => {
                return Err(ItineraryError::SchemaError {
                    column: REQUIRED_COLUMNS[0].to_string(),
                })
            }
        };

        let mut rows = Vec::new();
        for record in records {
            rows.push(record?.iter().map(str::to_string).collect::<Vec<_>>());
        }

        Self::from_rows(&header, rows)
    }

    fn insert(&mut self, record: Arc<AirportRecord>) {
        if !record.iata_code.is_empty() {
            self.airports
                .insert(record.iata_code.clone(), Arc::clone(&record));
        }
        if !record.icao_code.is_empty() {
            self.airports
                .insert(record.icao_code.clone(), Arc::clone(&record));
        }
        self.record_count += 1;
    }

    /// Exact, case-sensitive lookup by IATA or ICAO code.
    pub fn lookup(&self, code: &str) -> Option<&Arc<AirportRecord>> {
        self.airports.get(code)
    }

    /// Number of rows loaded.
    pub fn len(&self) -> usize {
        self.record_count
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOOKUP_CSV: &str = "\
name,iso_country,municipality,icao_code,iata_code,coordinates
John F Kennedy International Airport,US,New York,KJFK,JFK,\"-73.77, 40.63\"
Charles de Gaulle Airport,FR,Paris,LFPG,CDG,\"2.55, 49.01\"
Heliport Without City,US,,KXYZ,,\"0, 0\"
";

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_iata_and_icao_share_one_record() {
        let directory = AirportDirectory::from_csv_reader(LOOKUP_CSV.as_bytes()).unwrap();

        let by_iata = directory.lookup("JFK").unwrap();
        let by_icao = directory.lookup("KJFK").unwrap();
        assert!(Arc::ptr_eq(by_iata, by_icao));
        assert_eq!(by_iata.name, "John F Kennedy International Airport");
        assert_eq!(by_iata.coordinates, "-73.77, 40.63");
        assert_eq!(directory.len(), 3);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let directory = AirportDirectory::from_csv_reader(LOOKUP_CSV.as_bytes()).unwrap();
        assert!(directory.lookup("jfk").is_none());
        assert!(directory.lookup("ZZZ").is_none());
        assert!(directory.lookup("").is_none());
    }

    #[test]
    fn test_header_is_case_insensitive_and_order_independent() {
        let header = row(&[
            " Coordinates ",
            "IATA_CODE",
            "ICAO_Code",
            "Municipality",
            "ISO_COUNTRY",
            "Name",
        ]);
        let rows = vec![row(&["1, 2", "CDG", "LFPG", "Paris", "FR", "Charles de Gaulle Airport"])];

        let directory = AirportDirectory::from_rows(&header, rows).unwrap();
        let cdg = directory.lookup("LFPG").unwrap();
        assert_eq!(cdg.municipality, "Paris");
        assert_eq!(cdg.iso_country, "FR");
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let csv = "name,iso_country,municipality,icao_code,iata_code\nX,US,Y,KXXX,XXX\n";
        let err = AirportDirectory::from_csv_reader(csv.as_bytes()).unwrap_err();
        match err {
            ItineraryError::SchemaError { column } => assert_eq!(column, "coordinates"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_field_count_mismatch_is_record_error() {
        let csv = "name,iso_country,municipality,icao_code,iata_code,coordinates\nX,US,Y,KXXX\n";
        let err = AirportDirectory::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ItineraryError::RecordError { line: 2, .. }));
    }

    #[test]
    fn test_blank_name_is_record_error() {
        let header = row(&REQUIRED_COLUMNS);
        let rows = vec![row(&["   ", "US", "Y", "KXXX", "XXX", "0, 0"])];
        let err = AirportDirectory::from_rows(&header, rows).unwrap_err();
        assert!(matches!(err, ItineraryError::RecordError { .. }));
    }

    #[test]
    fn test_row_without_codes_is_record_error() {
        let header = row(&REQUIRED_COLUMNS);
        let rows = vec![
            row(&["Good", "US", "Y", "KGOO", "GOO", "0, 0"]),
            row(&["Nowhere", "US", "Y", " ", "", "0, 0"]),
        ];
        let err = AirportDirectory::from_rows(&header, rows).unwrap_err();
        assert!(matches!(err, ItineraryError::RecordError { line: 3, .. }));
    }

    #[test]
    fn test_empty_rows_are_skipped() {
        let header = row(&REQUIRED_COLUMNS);
        let rows = vec![Vec::new(), row(&["Good", "US", "Y", "KGOO", "GOO", "0, 0"])];
        let directory = AirportDirectory::from_rows(&header, rows).unwrap();
        assert_eq!(directory.len(), 1);
        assert!(directory.lookup("GOO").is_some());
    }

    #[test]
    fn test_icao_only_record() {
        let directory = AirportDirectory::from_csv_reader(LOOKUP_CSV.as_bytes()).unwrap();
        let heliport = directory.lookup("KXYZ").unwrap();
        assert_eq!(heliport.name, "Heliport Without City");
        assert!(!heliport.has_municipality());
        assert!(heliport.iata_code.is_empty());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let csv = "\
name,iso_country,municipality,icao_code,iata_code,coordinates
  Padded Airport  ,US, Padded City , KPAD ,PAD ,0
";
        let directory = AirportDirectory::from_csv_reader(csv.as_bytes()).unwrap();
        let padded = directory.lookup("PAD").unwrap();
        assert!(Arc::ptr_eq(padded, directory.lookup("KPAD").unwrap()));
        assert_eq!(padded.name, "Padded Airport");
        assert_eq!(padded.municipality, "Padded City");
        assert!(directory.lookup("PAD ").is_none());
    }

    #[test]
    fn test_empty_csv_is_schema_error() {
        let err = AirportDirectory::from_csv_reader("".as_bytes()).unwrap_err();
        assert!(matches!(err, ItineraryError::SchemaError { .. }));
    }
}
