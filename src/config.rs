use crate::models::RecordAnalyzerConfig;

pub const DEFAULT_RECORD_ANALYZER_CONFIG: &RecordAnalyzerConfig =
    &RecordAnalyzerConfig { top_group_count: 10 };
