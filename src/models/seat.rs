use std::fmt;

use crate::error::{Result, SeatingError};

/// Место в зале. Внутри индексы с нуля, в тексте с единицы: `R{row+1}C{col+1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatLocation {
    pub row: usize,
    pub column: usize,
}

impl SeatLocation {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Манхэттенское расстояние до другого места.
    pub fn distance(&self, other: &SeatLocation) -> usize {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column)
    }
}

impl fmt::Display for SeatLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row + 1, self.column + 1)
    }
}

/// Номер ряда и места из токена `R<int>C<int>`, оба с единицы.
/// Границы зала здесь не проверяются, это делает `SeatGrid::parse_location`.
pub(crate) fn parse_token(token: &str) -> Result<(usize, usize)> {
    let rest = token
        .strip_prefix('R')
        .ok_or_else(|| SeatingError::Parse(token.to_string()))?;
    let (row, column) = rest
        .split_once('C')
        .ok_or_else(|| SeatingError::Parse(token.to_string()))?;

    let row = parse_component(token, row, "row")?;
    let column = parse_component(token, column, "column")?;
    Ok((row, column))
}

// Знак и дробная часть распознаются, чтобы отказать с понятной причиной,
// а не молча провалить разбор.
fn parse_component(token: &str, text: &str, axis: &str) -> Result<usize> {
    let (sign, unsigned) = match text.as_bytes().first() {
        Some(b'-') | Some(b'+') => (Some(&text[..1]), &text[1..]),
        _ => (None, text),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole) || fraction.is_some_and(|f| !is_digits(f)) {
        return Err(SeatingError::Parse(token.to_string()));
    }

    if sign == Some("-") {
        return Err(SeatingError::validation(token, format!("{axis} must not be negative")));
    }
    if fraction.is_some() {
        return Err(SeatingError::validation(token, format!("{axis} must be an integer")));
    }
    if sign == Some("+") {
        return Err(SeatingError::validation(token, format!("{axis} must not carry a sign")));
    }

    let value: usize = whole
        .parse()
        .map_err(|_| SeatingError::validation(token, format!("{axis} is too large")))?;
    if value == 0 {
        return Err(SeatingError::validation(token, format!("{axis} numbering starts at 1")));
    }
    Ok(value)
}

/// Непрерывный блок мест в одном ряду, концы включительно.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeatRange {
    start: SeatLocation,
    end: SeatLocation,
}

impl SeatRange {
    /// Проверяет, что блок не пересекает ряды и не перевёрнут.
    pub fn new(start: SeatLocation, end: SeatLocation) -> Result<Self> {
        let range = Self { start, end };
        if start.row != end.row || start.column > end.column {
            return Err(SeatingError::InvalidRange(range));
        }
        Ok(range)
    }

    /// Блок из `len` мест в ряду `row`, начиная с `column`. `len` должен быть >= 1.
    pub(crate) fn in_row(row: usize, column: usize, len: usize) -> Self {
        debug_assert!(len >= 1);
        Self {
            start: SeatLocation::new(row, column),
            end: SeatLocation::new(row, column + len - 1),
        }
    }

    pub fn start(&self) -> SeatLocation {
        self.start
    }

    pub fn end(&self) -> SeatLocation {
        self.end
    }

    pub fn row(&self) -> usize {
        self.start.row
    }

    pub fn len(&self) -> usize {
        self.end.column.saturating_sub(self.start.column) + 1
    }

    /// Места блока слева направо.
    pub fn seats(&self) -> impl Iterator<Item = SeatLocation> + '_ {
        (self.start.column..=self.end.column).map(move |column| SeatLocation::new(self.start.row, column))
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SeatRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{} - {}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_label_is_one_based() {
        assert_eq!(SeatLocation::new(0, 0).to_string(), "R1C1");
        assert_eq!(SeatLocation::new(2, 10).to_string(), "R3C11");
    }

    #[test]
    fn range_labels() {
        assert_eq!(SeatRange::in_row(0, 0, 1).label(), "R1C1");
        assert_eq!(SeatRange::in_row(1, 4, 3).label(), "R2C5 - R2C7");
    }

    #[test]
    fn range_rejects_cross_row_and_reversed() {
        let a = SeatLocation::new(0, 3);
        let b = SeatLocation::new(1, 3);
        assert!(matches!(SeatRange::new(a, b), Err(SeatingError::InvalidRange(_))));

        let c = SeatLocation::new(0, 1);
        assert!(matches!(SeatRange::new(a, c), Err(SeatingError::InvalidRange(_))));

        let range = SeatRange::new(c, a).unwrap();
        assert_eq!(range.len(), 3);
        assert_eq!(range.seats().count(), 3);
    }

    #[test]
    fn token_parsing() {
        assert_eq!(parse_token("R1C1").unwrap(), (1, 1));
        assert_eq!(parse_token("R12C07").unwrap(), (12, 7));
    }

    #[test]
    fn malformed_tokens_are_parse_errors() {
        for token in ["", "R", "RC", "R1", "C1", "R1C", "R1C1A", "X1C1", "r1c1", "R1.C1", "R-C1"] {
            assert!(
                matches!(parse_token(token), Err(SeatingError::Parse(_))),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn sign_fraction_and_zero_are_validation_errors() {
        for token in ["R-1C1", "R1C-2", "R1.5C1", "R1C2.0", "R+1C1", "R0C1", "R1C0"] {
            assert!(
                matches!(parse_token(token), Err(SeatingError::Validation { .. })),
                "token {token:?}"
            );
        }
    }
}
