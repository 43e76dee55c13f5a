use desc_miner::{
    analyze_product_records, fetch_csv_document, AnalysisReport, ProductRecordListPreprocessor,
    DEFAULT_DATASET_CSV_URL,
};
use log::error;
use std::env;

fn main() {
    // Initialize the logger
    env_logger::init();

    // An alternate dataset URL may be passed as the first argument
    let dataset_csv_url = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATASET_CSV_URL.to_string());

    let csv_document = match fetch_csv_document(&dataset_csv_url) {
        Ok(csv_document) => csv_document,
        Err(e) => {
            error!("Failed to fetch dataset: {}", e);
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

    match analyze_product_records(&product_records) {
        Ok(analysis_report) => print_analysis_report(&analysis_report),
        Err(e) => {
            error!("Error analyzing product records: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_analysis_report(analysis_report: &AnalysisReport) {
    let (most_positive, most_negative) = match (
        &analysis_report.most_positive,
        &analysis_report.most_negative,
    ) {
        (Some(most_positive), Some(most_negative)) => (most_positive, most_negative),
        _ => {
            println!("No records to analyze.");
            return;
        }
    };

    println!("THE MOST POSITIVE (sentiment {}):", most_positive.sentiment);
    println!("{}", most_positive.name);
    println!("{}", most_positive.description);
    println!();

    println!("THE MOST NEGATIVE (sentiment {}):", most_negative.sentiment);
    println!("{}", most_negative.name);
    println!("{}", most_negative.description);
    println!();

    println!("WORDS FREQUENCY:");
    for (index, frequency_group) in analysis_report.top_frequency_groups.iter().enumerate() {
        println!(
            "{}. {} ({} occurrences)",
            index + 1,
            frequency_group.words.join(", "),
            frequency_group.frequency
        );
    }
}
