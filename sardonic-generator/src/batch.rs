//! Line-oriented batch processing.

use std::io::{BufRead, Write};

use crate::{ExplainableSarcasticResponse, GeneratorResult, ResponsePipeline};

/// Counts from one [`process_events`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Non-blank input lines processed.
    pub events: usize,
    /// Responses written across all events.
    pub responses: usize,
    /// Events that produced no response.
    pub empty: usize,
}

/// Read one event per line and write one JSON array per event.
///
/// Each output line holds the first response group of its event, or `[]`
/// when nothing was generated. Blank lines are skipped. The first failing
/// event aborts the run.
pub fn process_events<P, R, W>(
    pipeline: &P,
    reader: R,
    mut writer: W,
) -> GeneratorResult<BatchSummary>
where
    P: ResponsePipeline,
    R: BufRead,
    W: Write,
{
    let mut summary = BatchSummary::default();
    for line in reader.lines() {
        let line = line?;
        let event = line.trim();
        if event.is_empty() {
            continue;
        }

        tracing::info!(target: "sardonic_generator", %event, "processing event");
        let responses: Vec<ExplainableSarcasticResponse> = pipeline
            .generate_responses(event, 1)?
            .into_iter()
            .next()
            .unwrap_or_default();

        summary.events += 1;
        summary.responses += responses.len();
        if responses.is_empty() {
            summary.empty += 1;
        }

        serde_json::to_writer(&mut writer, &responses)?;
        writeln!(writer)?;
    }
    writer.flush()?;

    tracing::info!(
        target: "sardonic_generator",
        events = summary.events,
        responses = summary.responses,
        empty = summary.empty,
        "batch complete"
    );
    Ok(summary)
}
