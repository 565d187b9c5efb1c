//! Оркестратор рассадки.
//!
//! Запросы обрабатываются строго по порядку: набор кандидатов каждого
//! следующего запроса зависит от мест, занятых предыдущими. Зал принадлежит
//! `Allocator` целиком, посторонних изменений во время прогона нет.
//!
//! Фазы: `Idle -> Initializing -> Processing -> Done`. Ошибка отдельного
//! запроса или токена не прерывает прогон.

use std::time::Instant;

use crate::error::{Result, SeatingError};
use crate::models::{AllocationOutcome, AllocationReport, SeatGrid};
use crate::services::{candidates, scoring, selector};
use crate::telemetry::{AllocationEvent, AllocationEvents};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Initializing,
    Processing,
    Done,
}

impl RunPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunPhase::Idle => "idle",
            RunPhase::Initializing => "initializing",
            RunPhase::Processing => "processing",
            RunPhase::Done => "done",
        }
    }
}

/// Разбор строки запроса: целое число мест больше нуля.
pub fn parse_request(line: &str) -> Result<usize> {
    match line.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(SeatingError::InvalidRequest(line.trim().to_string())),
        Ok(count) => Ok(count),
    }
}

pub struct Allocator<E: AllocationEvents> {
    grid: SeatGrid,
    events: E,
    phase: RunPhase,
    outcomes: Vec<AllocationOutcome>,
    started: Instant,
}

impl<E: AllocationEvents> Allocator<E> {
    pub fn new(grid: SeatGrid, events: E) -> Self {
        Self {
            grid,
            events,
            phase: RunPhase::Idle,
            outcomes: Vec::new(),
            started: Instant::now(),
        }
    }

    pub fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Применяет стартовый список занятых мест (`R1C1 R1C2 ...`) по порядку.
    ///
    /// Неразобранный или уже занятый токен пропускается, места до него
    /// остаются занятыми, остальные токены применяются дальше. Возвращает
    /// число занятых мест. Допустимо только до первого запроса.
    pub fn pre_reserve(&mut self, line: &str) -> Result<usize> {
        if self.phase != RunPhase::Idle {
            return Err(SeatingError::InvalidPhase {
                operation: "pre_reserve",
                phase: self.phase.as_str(),
            });
        }
        self.phase = RunPhase::Initializing;

        let mut reserved = 0;
        for token in line.split_whitespace() {
            let result = self
                .grid
                .parse_location(token)
                .and_then(|location| self.grid.reserve(location).map(|_| location));

            match result {
                Ok(location) => {
                    reserved += 1;
                    self.events
                        .record(&AllocationEvent::SeatPreReserved { token, location });
                }
                Err(error) => {
                    self.events
                        .record(&AllocationEvent::PreReservationSkipped { token, error: &error });
                }
            }
        }
        Ok(reserved)
    }

    /// Обрабатывает одну строку запроса и запоминает её итог.
    pub fn allocate(&mut self, request: &str) -> &AllocationOutcome {
        self.phase = RunPhase::Processing;
        let index = self.outcomes.len();
        let started = Instant::now();

        let mut candidate_count = 0;
        let result = parse_request(request).and_then(|seat_count| {
            let found = candidates::find_all_ranges(&self.grid, seat_count);
            candidate_count = found.len();
            let scored = scoring::score_all(found, self.grid.center());
            let best = selector::select_best(&scored, seat_count)?;
            self.grid.reserve_range(&best.range)?;
            Ok(best)
        });

        let request = request.trim();
        let outcome = match result {
            Ok(best) => {
                self.events.record(&AllocationEvent::RequestAllocated {
                    index,
                    request,
                    candidates: candidate_count,
                    range: &best.range,
                    score: best.score,
                    elapsed: started.elapsed(),
                });
                AllocationOutcome::allocated(request, best.range)
            }
            Err(error) => {
                self.events.record(&AllocationEvent::RequestRejected {
                    index,
                    request,
                    candidates: candidate_count,
                    error: &error,
                    elapsed: started.elapsed(),
                });
                AllocationOutcome::unavailable(request, error)
            }
        };

        self.outcomes.push(outcome);
        &self.outcomes[index]
    }

    /// Завершает прогон: итоги запросов и число оставшихся свободных мест.
    pub fn finish(mut self) -> (AllocationReport, SeatGrid) {
        self.phase = RunPhase::Done;
        let report = AllocationReport {
            available: self.grid.available_count(),
            outcomes: self.outcomes,
        };
        self.events.record(&AllocationEvent::RunCompleted {
            requests: report.outcomes.len(),
            allocated: report.allocated_count(),
            available: report.available,
            elapsed: self.started.elapsed(),
        });
        (report, self.grid)
    }
}

/// Полный прогон: стартовый список (если есть), затем все запросы по порядку.
pub fn run_allocation<E, S>(
    grid: SeatGrid,
    reserved: Option<&str>,
    requests: &[S],
    events: E,
) -> (AllocationReport, SeatGrid)
where
    E: AllocationEvents,
    S: AsRef<str>,
{
    let mut allocator = Allocator::new(grid, events);
    if let Some(line) = reserved {
        // Свежий Allocator всегда в фазе Idle
        let _ = allocator.pre_reserve(line);
    }
    for request in requests {
        allocator.allocate(request.as_ref());
    }
    allocator.finish()
}
