use serde::Serialize;

use crate::config::OutputFormat;
use crate::models::AllocationReport;

#[derive(Debug, Serialize)]
struct ReportView<'a> {
    results: Vec<OutcomeView<'a>>,
    available: usize,
}

#[derive(Debug, Serialize)]
struct OutcomeView<'a> {
    request: &'a str,
    seats: Option<String>,
}

/// Текст для вывода: по строке на запрос и число свободных мест в конце.
pub fn render(report: &AllocationReport, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

pub fn render_text(report: &AllocationReport) -> String {
    let mut out = String::new();
    for outcome in &report.outcomes {
        out.push_str(&outcome.label());
        out.push('\n');
    }
    out.push_str(&report.available.to_string());
    out.push('\n');
    out
}

pub fn render_json(report: &AllocationReport) -> Result<String, serde_json::Error> {
    let view = ReportView {
        results: report
            .outcomes
            .iter()
            .map(|o| OutcomeView {
                request: &o.request,
                seats: o.range().map(|r| r.label()),
            })
            .collect(),
        available: report.available,
    };
    let mut json = serde_json::to_string(&view)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeatingError;
    use crate::models::{AllocationOutcome, SeatLocation, SeatRange};

    fn report() -> AllocationReport {
        let pair = SeatRange::new(SeatLocation::new(0, 0), SeatLocation::new(0, 1)).unwrap();
        AllocationReport {
            outcomes: vec![
                AllocationOutcome::allocated("2", pair),
                AllocationOutcome::unavailable("2", SeatingError::NoCandidate(2)),
            ],
            available: 1,
        }
    }

    #[test]
    fn text_output() {
        assert_eq!(render_text(&report()), "R1C1 - R1C2\nNot Available\n1\n");
    }

    #[test]
    fn json_output() {
        let json = render(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "results": [
                    {"request": "2", "seats": "R1C1 - R1C2"},
                    {"request": "2", "seats": null}
                ],
                "available": 1
            })
        );
    }
}
