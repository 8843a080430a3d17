use super::error::DataError;
use super::model::{IrisTable, Measure, Observation};

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Columns the header row must contain. Order in the file does not matter;
/// rows are decoded by header name.
pub const EXPECTED_COLUMNS: [&str; IrisTable::COLUMN_COUNT] = [
    "sepal_length",
    "sepal_width",
    "petal_length",
    "petal_width",
    "species",
];

/// Parse CSV text (header row required) into a table.
///
/// The header is validated up front so a schema mismatch surfaces as
/// [`DataError::MissingColumn`] rather than a per-row decode failure.
pub fn parse_csv(text: &str) -> Result<IrisTable, DataError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| DataError::Malformed {
            row: 0,
            reason: e.to_string(),
        })?
        .clone();
    for col in EXPECTED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(DataError::MissingColumn(col));
        }
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize::<Observation>().enumerate() {
        let obs = result.map_err(|e| DataError::Malformed {
            row: row_no + 1,
            reason: e.to_string(),
        })?;
        rows.push(obs);
    }

    Ok(IrisTable::new(rows))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data::model::Species;

    const SAMPLE_CSV: &str = "\
sepal_length,sepal_width,petal_length,petal_width,species
5.1,3.5,1.4,0.2,setosa
4.9,3.0,1.4,0.2,setosa
7.0,3.2,4.7,1.4,versicolor
6.4,3.2,4.5,1.5,versicolor
6.3,3.3,6.0,2.5,virginica
5.8,2.7,5.1,1.9,virginica
";

    #[test]
    fn parses_rows_by_header_name() {
        let table = parse_csv(SAMPLE_CSV).unwrap();
        assert_eq!(table.len(), 6);

        let first = &table.rows()[0];
        assert_eq!(first.sepal_length, 5.1);
        assert_eq!(first.petal_width, 0.2);
        assert_eq!(first.species, Species::Setosa);
    }

    #[test]
    fn accepts_reordered_columns() {
        let reordered = "\
species,petal_width,petal_length,sepal_width,sepal_length
setosa,0.2,1.4,3.5,5.1
";
        let table = parse_csv(reordered).unwrap();
        assert_eq!(table.rows()[0].sepal_length, 5.1);
        assert_eq!(table.rows()[0].species, Species::Setosa);
    }

    #[test]
    fn rejects_missing_column() {
        let no_species = "\
sepal_length,sepal_width,petal_length,petal_width
5.1,3.5,1.4,0.2
";
        let err = parse_csv(no_species).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn("species")));
    }

    #[test]
    fn rejects_non_numeric_measurement() {
        let bad = "\
sepal_length,sepal_width,petal_length,petal_width,species
5.1,3.5,1.4,0.2,setosa
oops,3.0,1.4,0.2,setosa
";
        let err = parse_csv(bad).unwrap_err();
        match err {
            DataError::Malformed { row, .. } => assert_eq!(row, 2),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_species() {
        let bad = "\
sepal_length,sepal_width,petal_length,petal_width,species
5.1,3.5,1.4,0.2,tulipa
";
        assert!(matches!(
            parse_csv(bad),
            Err(DataError::Malformed { row: 1, .. })
        ));
    }

    #[test]
    fn empty_body_yields_empty_table() {
        let header_only = "sepal_length,sepal_width,petal_length,petal_width,species\n";
        let table = parse_csv(header_only).unwrap();
        assert!(table.is_empty());
    }
}
