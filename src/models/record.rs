use crate::types::{ProductName, SentimentScore};
use crate::Error;

/// A single dataset row: the product's name and its raw description markup.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub name: ProductName,
    pub description: String,
}

impl ProductRecord {
    pub fn new(name: &str, description: &str) -> Self {
        ProductRecord {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    /// Builds a record from raw CSV fields, validating at the boundary.
    ///
    /// A missing or blank name is an error. A missing description is treated
    /// as an empty one so the record still participates in the analysis.
    pub fn from_fields(name: Option<&str>, description: Option<&str>) -> Result<Self, Error> {
        let name = match name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(Error::MissingField("name".to_string())),
        };

        Ok(ProductRecord::new(name, description.unwrap_or("")))
    }
}

/// A record paired with its computed sentiment score. The description held
/// here is the markup-stripped one, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub name: ProductName,
    pub description: String,
    pub sentiment: SentimentScore,
}
