//! Диагностические события рассадки.
//!
//! Оркестратор сообщает о ходе работы через `AllocationEvents`. Приёмник
//! ничего не возвращает и не может повлиять на результат: с `NoopEvents`
//! рассадка ведёт себя так же, как с `TracingEvents`.

use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::SeatingError;
use crate::models::{SeatLocation, SeatRange};

#[derive(Debug, Clone, Copy)]
pub enum AllocationEvent<'a> {
    /// Место из стартового списка занято.
    SeatPreReserved {
        token: &'a str,
        location: SeatLocation,
    },
    /// Токен стартового списка пропущен, уже занятые места остаются.
    PreReservationSkipped {
        token: &'a str,
        error: &'a SeatingError,
    },
    RequestAllocated {
        index: usize,
        request: &'a str,
        candidates: usize,
        range: &'a SeatRange,
        score: usize,
        elapsed: Duration,
    },
    RequestRejected {
        index: usize,
        request: &'a str,
        candidates: usize,
        error: &'a SeatingError,
        elapsed: Duration,
    },
    RunCompleted {
        requests: usize,
        allocated: usize,
        available: usize,
        elapsed: Duration,
    },
}

pub trait AllocationEvents {
    fn record(&self, event: &AllocationEvent<'_>);
}

/// Ничего не пишет. Для тестов.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEvents;

impl AllocationEvents for NoopEvents {
    fn record(&self, _event: &AllocationEvent<'_>) {}
}

/// Пишет события в `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEvents;

impl AllocationEvents for TracingEvents {
    fn record(&self, event: &AllocationEvent<'_>) {
        match *event {
            AllocationEvent::SeatPreReserved { token, location } => {
                debug!(operation = "pre_reserve", token, %location, "Seat pre-reserved");
            }
            AllocationEvent::PreReservationSkipped { token, error } => {
                warn!(operation = "pre_reserve", token, %error, "Skipping pre-reserved seat");
            }
            AllocationEvent::RequestAllocated {
                index,
                request,
                candidates,
                range,
                score,
                elapsed,
            } => {
                info!(
                    operation = "allocate",
                    index,
                    request,
                    candidates,
                    %range,
                    score,
                    elapsed_us = elapsed.as_micros() as u64,
                    "Seats allocated"
                );
            }
            AllocationEvent::RequestRejected {
                index,
                request,
                candidates,
                error,
                elapsed,
            } => {
                info!(
                    operation = "allocate",
                    index,
                    request,
                    candidates,
                    %error,
                    elapsed_us = elapsed.as_micros() as u64,
                    "Request not available"
                );
            }
            AllocationEvent::RunCompleted {
                requests,
                allocated,
                available,
                elapsed,
            } => {
                info!(
                    operation = "run",
                    requests,
                    allocated,
                    available,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "✅ Allocation run completed"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Собирает имена событий, чтобы проверить порядок вызовов.
    #[derive(Default)]
    struct RecordingEvents(RefCell<Vec<String>>);

    impl AllocationEvents for RecordingEvents {
        fn record(&self, event: &AllocationEvent<'_>) {
            let name = match event {
                AllocationEvent::SeatPreReserved { .. } => "pre_reserved",
                AllocationEvent::PreReservationSkipped { .. } => "pre_skipped",
                AllocationEvent::RequestAllocated { .. } => "allocated",
                AllocationEvent::RequestRejected { .. } => "rejected",
                AllocationEvent::RunCompleted { .. } => "completed",
            };
            self.0.borrow_mut().push(name.to_string());
        }
    }

    #[test]
    fn sinks_accept_every_event() {
        let error = SeatingError::NoCandidate(2);
        let range = SeatRange::in_row(0, 0, 2);
        let events = [
            AllocationEvent::PreReservationSkipped { token: "R9C9", error: &error },
            AllocationEvent::RequestAllocated {
                index: 0,
                request: "2",
                candidates: 1,
                range: &range,
                score: 1,
                elapsed: Duration::ZERO,
            },
        ];

        let recording = RecordingEvents::default();
        for event in &events {
            NoopEvents.record(event);
            TracingEvents.record(event);
            recording.record(event);
        }
        assert_eq!(*recording.0.borrow(), vec!["pre_skipped", "allocated"]);
    }
}
