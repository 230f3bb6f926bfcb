use crate::domain::request::WalletOutcome;
use crate::error::Result;
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `provider,action,result` rows with a header.
    #[default]
    Csv,
    /// One JSON object per line.
    Json,
}

enum Sink<W: Write> {
    Csv(csv::Writer<W>),
    Json(W),
}

/// Writes wallet outcomes to any `Write` sink (e.g., Stdout, File).
pub struct OutcomeWriter<W: Write> {
    sink: Sink<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        let sink = match format {
            OutputFormat::Csv => Sink::Csv(csv::Writer::from_writer(writer)),
            OutputFormat::Json => Sink::Json(writer),
        };
        Self { sink }
    }

    pub fn write_outcome(&mut self, outcome: &WalletOutcome) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(writer) => writer.serialize(outcome)?,
            Sink::Json(writer) => {
                serde_json::to_writer(&mut *writer, outcome)?;
                writer.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    pub fn write_outcomes<I>(&mut self, outcomes: I) -> Result<()>
    where
        I: IntoIterator<Item = WalletOutcome>,
    {
        for outcome in outcomes {
            self.write_outcome(&outcome)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(writer) => writer.flush()?,
            Sink::Json(writer) => writer.flush()?,
        }
        Ok(())
    }
}
