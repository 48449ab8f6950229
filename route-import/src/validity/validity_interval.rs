use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// a date window during which an assignment (operator-to-route, route
/// itinerary) is active. an absent end date means the window extends
/// indefinitely into the future.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ValidityInterval {
    /// identity of the owning record, used to skip self-comparison when
    /// a record is edited against its own prior window
    pub key: String,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl ValidityInterval {
    /// the comparison end bound, with open-ended windows saturating to
    /// the maximum representable date
    pub fn effective_end(&self) -> NaiveDate {
        self.end.unwrap_or(NaiveDate::MAX)
    }

    /// inclusive-bounds intersection test against another window
    pub fn overlaps(&self, other: &ValidityInterval) -> bool {
        !(self.effective_end() < other.start || other.effective_end() < self.start)
    }
}

/// candidate dates as they arrive from a form or the command line,
/// before the overlap guard has validated them
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntervalCandidate {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}
