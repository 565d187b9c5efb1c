use crate::models::{CenterReference, SeatRange};

/// Штраф за удалённость блока от центра: сумма по всем местам блока
/// манхэттенского расстояния до ближайшей центральной точки.
///
/// Считается каждое место, а не только середина блока. При чётном числе
/// мест середина блока даёт ошибку на единицу у границы чётности, а полная
/// сумма сама предпочитает блоки, накрывающие настоящий центр.
pub fn score(range: &SeatRange, center: &CenterReference) -> usize {
    range
        .seats()
        .map(|seat| center.nearest_distance(&seat))
        .sum()
}

/// Кандидат вместе с его штрафом.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredRange {
    pub range: SeatRange,
    pub score: usize,
}

pub fn score_all(candidates: Vec<SeatRange>, center: &CenterReference) -> Vec<ScoredRange> {
    candidates
        .into_iter()
        .map(|range| ScoredRange {
            score: score(&range, center),
            range,
        })
        .collect()
}
