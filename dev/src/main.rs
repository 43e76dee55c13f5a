//! Offline analysis runner for local dataset snapshots.
//!
//! Reads a `name,description` CSV from disk instead of fetching it over
//! HTTP, which makes lexicon and normalizer changes cheap to iterate on.

use desc_miner::{analyze_product_records, ProductRecordListPreprocessor};
use log::{error, info};
use std::env;
use std::fs;

fn main() {
    env_logger::init();

    let csv_path = match env::args().nth(1) {
        Some(csv_path) => csv_path,
        None => {
            eprintln!("Usage: dev <path-to-dataset.csv>");
            std::process::exit(1);
        }
    };

    let csv_document = match fs::read_to_string(&csv_path) {
        Ok(csv_document) => csv_document,
        Err(e) => {
            error!("Failed to read {}: {}", csv_path, e);
            std::process::exit(1);
        }
    };

    let product_records =
        match ProductRecordListPreprocessor::read_product_record_list_from_string(&csv_document) {
            Ok(product_records) => product_records,
            Err(e) => {
                error!("Failed to parse dataset: {}", e);
                std::process::exit(1);
            }
        };

    info!("Loaded {} product records", product_records.len());

    let analysis_report = match analyze_product_records(&product_records) {
        Ok(analysis_report) => analysis_report,
        Err(e) => {
            error!("Error analyzing product records: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(most_positive) = &analysis_report.most_positive {
        println!(
            "Most positive: {} ({})",
            most_positive.name, most_positive.sentiment
        );
    }

    if let Some(most_negative) = &analysis_report.most_negative {
        println!(
            "Most negative: {} ({})",
            most_negative.name, most_negative.sentiment
        );
    }

    for (index, frequency_group) in analysis_report.top_frequency_groups.iter().enumerate() {
        println!(
            "{}. [{}] {}",
            index + 1,
            frequency_group.frequency,
            frequency_group.words.join(", ")
        );
    }
}
