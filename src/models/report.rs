use crate::error::SeatingError;
use crate::models::SeatRange;

pub const NOT_AVAILABLE: &str = "Not Available";

/// Итог одного запроса в порядке поступления.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationOutcome {
    pub request: String,
    pub result: Result<SeatRange, SeatingError>,
}

impl AllocationOutcome {
    pub fn allocated(request: &str, range: SeatRange) -> Self {
        Self {
            request: request.to_string(),
            result: Ok(range),
        }
    }

    pub fn unavailable(request: &str, error: SeatingError) -> Self {
        Self {
            request: request.to_string(),
            result: Err(error),
        }
    }

    pub fn range(&self) -> Option<&SeatRange> {
        self.result.as_ref().ok()
    }

    /// Метка блока или `Not Available`.
    pub fn label(&self) -> String {
        match &self.result {
            Ok(range) => range.label(),
            Err(_) => NOT_AVAILABLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationReport {
    pub outcomes: Vec<AllocationOutcome>,
    pub available: usize,
}

impl AllocationReport {
    pub fn allocated_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn seats_allocated(&self) -> usize {
        self.outcomes.iter().filter_map(|o| o.range()).map(|r| r.len()).sum()
    }
}
