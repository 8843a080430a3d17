use reqwest::blocking::Client;

use super::error::DataError;
use super::loader::parse_csv;
use super::model::IrisTable;

/// Fixed location of the iris measurements CSV.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/mwaskom/seaborn-data/master/iris.csv";

const USER_AGENT: &str = concat!("iris-scope/", env!("CARGO_PKG_VERSION"));

/// Download the CSV body from `url`. One attempt, no caching; blocks until
/// the transfer completes or fails.
pub fn fetch_csv(url: &str) -> Result<String, DataError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| DataError::Unavailable(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| DataError::Unavailable(e.to_string()))?;

    if !response.status().is_success() {
        return Err(DataError::Unavailable(format!(
            "HTTP {} from {url}",
            response.status()
        )));
    }

    response
        .text()
        .map_err(|e| DataError::Unavailable(e.to_string()))
}

/// The whole loader stage: fetch the fixed URL and parse it into a table.
pub fn load_remote() -> Result<IrisTable, DataError> {
    log::info!("fetching dataset from {DATASET_URL}");
    let body = fetch_csv(DATASET_URL)?;
    let table = parse_csv(&body)?;
    log::info!("loaded {} observations", table.len());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Measure, Species};
    use crate::stats::groups::species_means;
    use crate::stats::summary::SummaryStats;

    // Reference values for the live dataset; run with `cargo test -- --ignored`.
    #[test]
    #[ignore = "fetches the live dataset over the network"]
    fn live_dataset_matches_reference_values() {
        let table = load_remote().unwrap();
        assert_eq!(table.len(), 150);
        assert!(table.missing_counts().iter().all(|(_, n)| *n == 0));

        let stats = SummaryStats::from_values(&table.column(Measure::SepalLength));
        assert_eq!(stats.count, 150);
        assert!((stats.min - 4.3).abs() < 1e-9);
        assert!((stats.max - 7.9).abs() < 1e-9);

        for measure in [Measure::SepalLength, Measure::PetalLength] {
            let means = species_means(&table, measure);
            assert!(means[&Species::Setosa] < means[&Species::Versicolor]);
            assert!(means[&Species::Versicolor] < means[&Species::Virginica]);
        }
    }
}
