//! Output writers for simulated hands.

use std::io::{self, BufWriter, Write};

use spades_engine::Seat;

use crate::config::OutputFormat;
use crate::error::SimError;
use crate::simulator::HandRecord;

pub struct OutputWriter {
    writer: Box<dyn Write>,
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(writer: Box<dyn Write>, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(Box::new(BufWriter::new(io::stdout())), format)
    }

    pub fn write_hand(&mut self, record: &HandRecord) -> Result<(), SimError> {
        match self.format {
            OutputFormat::Jsonl => {
                let json = serde_json::to_string(record)?;
                writeln!(self.writer, "{json}")?;
            }
            OutputFormat::Text => write_text(&mut self.writer, record)?,
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), SimError> {
        self.writer.flush()?;
        Ok(())
    }
}

fn write_text(w: &mut dyn Write, record: &HandRecord) -> io::Result<()> {
    let bids = record
        .bids
        .iter()
        .map(|(seat, bid)| match bid {
            Some(b) => format!("{seat}={b}"),
            None => format!("{seat}=-"),
        })
        .collect::<Vec<_>>()
        .join(" ");
    let winners = record
        .result
        .winner_by_trick
        .iter()
        .map(Seat::to_string)
        .collect::<String>();

    writeln!(
        w,
        "hand {} seed={} leader={}",
        record.hand_no, record.seed, record.leader
    )?;
    writeln!(w, "  bids   {bids}")?;
    writeln!(w, "  tricks {winners}")?;
    writeln!(
        w,
        "  books  NS={} EW={}",
        record.result.books_by_team.ns, record.result.books_by_team.ew
    )?;
    writeln!(
        w,
        "  score  NS={} EW={} (bags NS={} EW={})",
        record.scores.ns, record.scores.ew, record.bags.ns, record.bags.ew
    )
}
