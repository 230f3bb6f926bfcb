use crate::domain::request::WalletRequest;
use crate::error::{Result, WalletError};
use std::io::Read;

/// Parses wallet requests from CSV.
///
/// The first row must be the `provider, action` header. Fields are trimmed, so
/// `" esewa , verify"` names the `ESEWA` family. Rows with a missing column or an
/// action other than `verify`/`refund` surface as errors for that row only.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Wraps `source` without reading from it yet.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Yields one parsed request per data row, reading as it goes.
    pub fn requests(self) -> impl Iterator<Item = Result<WalletRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(WalletError::from))
    }
}
