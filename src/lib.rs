pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;
pub mod telemetry;

pub use error::{Result, SeatingError};

use tracing::debug;

use crate::controllers::SessionInput;
use crate::models::{AllocationReport, SeatGrid};
use crate::telemetry::AllocationEvents;

// Shared state для всего приложения
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: config::Config,
    grid: SeatGrid,
}

impl AppState {
    /// Проверяет размеры и строит пустой зал. Ошибка здесь фатальна.
    pub fn new(config: config::Config) -> Result<Self> {
        let grid = SeatGrid::create(config.grid.rows, config.grid.columns)?;
        Ok(Self { config, grid })
    }

    /// Один прогон по разобранному входу. Каждый прогон начинается с пустого зала.
    pub fn process<E: AllocationEvents>(&self, input: &SessionInput, events: E) -> AllocationReport {
        let (report, grid) = services::run_allocation(
            self.grid.clone(),
            input.reserved.as_deref(),
            &input.requests,
            events,
        );
        debug!("Seat map after run:\n{}", grid.render_map());
        report
    }

    /// Разбор текста, прогон и форматирование ответа.
    pub fn process_text<E: AllocationEvents>(&self, text: &str, events: E) -> Result<String> {
        let input = controllers::parse_session(text);
        let report = self.process(&input, events);
        controllers::render(&report, self.config.app.output_format)
            .map_err(|e| SeatingError::Render(e.to_string()))
    }
}
