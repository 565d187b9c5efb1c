use smallvec::SmallVec;

use crate::error::{Result, SeatingError};
use crate::models::seat::{parse_token, SeatLocation, SeatRange};

/// Одна или две "центральные" точки первого ряда. При нечётном числе мест
/// центр один, при чётном два равноправных, считается ближайший.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenterReference(SmallVec<[SeatLocation; 2]>);

impl CenterReference {
    pub fn for_columns(columns: usize) -> Self {
        let mut points = SmallVec::new();
        if columns % 2 == 1 {
            points.push(SeatLocation::new(0, columns / 2));
        } else {
            points.push(SeatLocation::new(0, columns / 2 - 1));
            points.push(SeatLocation::new(0, columns / 2));
        }
        Self(points)
    }

    pub fn points(&self) -> &[SeatLocation] {
        &self.0
    }

    /// Расстояние от места до ближайшей центральной точки.
    pub fn nearest_distance(&self, seat: &SeatLocation) -> usize {
        self.0
            .iter()
            .map(|center| center.distance(seat))
            .min()
            .unwrap_or(0)
    }
}

/// План зала с занятостью мест. Занятое место больше не освобождается.
#[derive(Debug, Clone)]
pub struct SeatGrid {
    rows: usize,
    columns: usize,
    occupancy: Vec<bool>,
    row_available: Vec<usize>,
    available: usize,
    center: CenterReference,
}

impl SeatGrid {
    pub fn create(rows: usize, columns: usize) -> Result<Self> {
        if rows < 1 || columns < 1 {
            return Err(SeatingError::Config(format!(
                "grid must have at least one row and one column, got {rows}x{columns}"
            )));
        }
        let total = rows
            .checked_mul(columns)
            .ok_or_else(|| SeatingError::Config(format!("grid {rows}x{columns} is too large")))?;

        Ok(Self {
            rows,
            columns,
            occupancy: vec![false; total],
            row_available: vec![columns; rows],
            available: total,
            center: CenterReference::for_columns(columns),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn center(&self) -> &CenterReference {
        &self.center
    }

    /// Разбирает токен `R<int>C<int>` и проверяет, что место лежит в зале.
    pub fn parse_location(&self, token: &str) -> Result<SeatLocation> {
        let (row, column) = parse_token(token)?;
        if row > self.rows {
            return Err(SeatingError::validation(
                token,
                format!("row {row} exceeds the {} rows of the grid", self.rows),
            ));
        }
        if column > self.columns {
            return Err(SeatingError::validation(
                token,
                format!("column {column} exceeds the {} columns of the grid", self.columns),
            ));
        }
        Ok(SeatLocation::new(row - 1, column - 1))
    }

    pub fn is_available(&self, location: SeatLocation) -> Result<bool> {
        let index = self.index(location)?;
        Ok(!self.occupancy[index])
    }

    pub fn reserve(&mut self, location: SeatLocation) -> Result<()> {
        let index = self.index(location)?;
        if self.occupancy[index] {
            return Err(SeatingError::AlreadyReserved(location));
        }
        self.occupancy[index] = true;
        self.row_available[location.row] -= 1;
        self.available -= 1;
        Ok(())
    }

    /// Резервирует весь блок или ничего: сначала проверяем каждое место,
    /// потом занимаем слева направо.
    pub fn reserve_range(&mut self, range: &SeatRange) -> Result<()> {
        let range = SeatRange::new(range.start(), range.end())?;
        self.index(range.end())?;

        if let Some(taken) = range.seats().find(|seat| self.occupancy[self.flat(*seat)]) {
            return Err(SeatingError::AlreadyReserved(taken));
        }
        for seat in range.seats() {
            self.reserve(seat)?;
        }
        Ok(())
    }

    pub fn available_count(&self) -> usize {
        self.available
    }

    /// Свободных мест в ряду; для ряда вне зала 0.
    pub fn row_available(&self, row: usize) -> usize {
        self.row_available.get(row).copied().unwrap_or(0)
    }

    /// Занятость ряда слева направо (`true` = занято).
    pub fn row_occupancy(&self, row: usize) -> &[bool] {
        if row >= self.rows {
            return &[];
        }
        let start = row * self.columns;
        &self.occupancy[start..start + self.columns]
    }

    /// Схема зала: `.` свободно, `X` занято, первый ряд сверху.
    pub fn render_map(&self) -> String {
        (0..self.rows)
            .map(|row| {
                self.row_occupancy(row)
                    .iter()
                    .map(|taken| if *taken { 'X' } else { '.' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn index(&self, location: SeatLocation) -> Result<usize> {
        if location.row >= self.rows || location.column >= self.columns {
            return Err(SeatingError::OutOfBounds {
                location,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(self.flat(location))
    }

    fn flat(&self, location: SeatLocation) -> usize {
        location.row * self.columns + location.column
    }
}
