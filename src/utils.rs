pub mod fetch_csv_document;
pub mod strip_markup_tags;

pub use fetch_csv_document::fetch_csv_document;
pub use strip_markup_tags::strip_markup_tags;
