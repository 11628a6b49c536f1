//! Load property lists from CSV
//!
//! Used by the sensitivity binary to sweep a batch of subject properties
//! instead of a single hardcoded address.

use super::PropertyInput;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row: Street,City,State,Zip,RehabCost
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Street")]
    street: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Zip")]
    zip: String,
    #[serde(rename = "RehabCost", default)]
    rehab_cost: f64,
}

impl CsvRow {
    fn to_input(self) -> PropertyInput {
        PropertyInput {
            street: self.street,
            city: self.city,
            state: self.state,
            zip: self.zip,
            rehab_cost: self.rehab_cost,
        }
    }
}

/// Load all properties from a CSV file
pub fn load_properties<P: AsRef<Path>>(path: P) -> Result<Vec<PropertyInput>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut properties = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        properties.push(row.to_input());
    }

    Ok(properties)
}

/// Load properties from any reader (e.g., string buffer)
pub fn load_properties_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<PropertyInput>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut properties = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        properties.push(row.to_input());
    }

    Ok(properties)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_reader() {
        let data = "Street,City,State,Zip,RehabCost\n\
                    123 Main St,Austin,TX,78701,25000\n\
                    9 Elm Ave,Denver,CO,80202,0\n";

        let properties = load_properties_from_reader(data.as_bytes()).unwrap();
        assert_eq!(properties.len(), 2);
        assert_eq!(properties[0].city, "Austin");
        assert_eq!(properties[0].rehab_cost, 25_000.0);
        assert_eq!(properties[1].rehab_cost, 0.0);
        assert!(properties[1].validate().is_ok());
    }
}
