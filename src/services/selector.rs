use crate::error::{Result, SeatingError};
use crate::services::scoring::ScoredRange;

/// Лучший кандидат: минимальный штраф, при равенстве ближний к сцене ряд,
/// затем меньшая начальная колонка. Ключ полный, поэтому результат
/// не зависит от порядка кандидатов во входном списке.
pub fn select_best(candidates: &[ScoredRange], seat_count: usize) -> Result<ScoredRange> {
    candidates
        .iter()
        .min_by_key(|c| (c.score, c.range.row(), c.range.start().column))
        .copied()
        .ok_or(SeatingError::NoCandidate(seat_count))
}
