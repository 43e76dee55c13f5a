use crate::models::ScoredRecord;

/// Retains the single most positive and single most negative record observed.
///
/// Comparisons are strict (`<` / `>`), so among records tied at an extreme the
/// first one observed is kept.
pub struct ExtremumTracker {
    most_positive: Option<ScoredRecord>,
    most_negative: Option<ScoredRecord>,
}

impl ExtremumTracker {
    pub fn new() -> Self {
        ExtremumTracker {
            most_positive: None,
            most_negative: None,
        }
    }

    pub fn observe(&mut self, scored_record: ScoredRecord) {
        // A single record fills both slots
        let is_new_negative = self
            .most_negative
            .as_ref()
            .map_or(true, |current| scored_record.sentiment < current.sentiment);

        if is_new_negative {
            self.most_negative = Some(scored_record.clone());
        }

        let is_new_positive = self
            .most_positive
            .as_ref()
            .map_or(true, |current| scored_record.sentiment > current.sentiment);

        if is_new_positive {
            self.most_positive = Some(scored_record);
        }
    }

    pub fn most_positive(&self) -> Option<&ScoredRecord> {
        self.most_positive.as_ref()
    }

    pub fn most_negative(&self) -> Option<&ScoredRecord> {
        self.most_negative.as_ref()
    }

    /// Consumes the tracker, yielding `(most_positive, most_negative)`.
    pub fn into_extrema(self) -> (Option<ScoredRecord>, Option<ScoredRecord>) {
        (self.most_positive, self.most_negative)
    }
}

impl Default for ExtremumTracker {
    fn default() -> Self {
        Self::new()
    }
}
