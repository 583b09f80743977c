use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::service::{EcoSession, PurchaseRequest};
use crate::footprint::EstimateError;

/// Replays a CSV shopping list (`product,price,buyer,shipper`) into a fresh session.
pub struct PurchaseImporter;

impl PurchaseImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<EcoSession, PurchaseImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<EcoSession, PurchaseImportError> {
        let requests = parse_requests(reader)?;
        let mut session = EcoSession::new();

        for (index, request) in requests.iter().enumerate() {
            session
                .submit_purchase(request)
                .map_err(|source| PurchaseImportError::Purchase {
                    row: index + 1,
                    source,
                })?;
        }

        info!(purchases = requests.len(), "purchase list replayed");
        Ok(session)
    }
}

pub(crate) fn parse_requests<R: Read>(reader: R) -> Result<Vec<PurchaseRequest>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<PurchaseRow>()
        .map(|row| row.map(PurchaseRow::into_request))
        .collect()
}

#[derive(Debug, Deserialize)]
struct PurchaseRow {
    product: String,
    price: f64,
    buyer: String,
    shipper: String,
}

impl PurchaseRow {
    fn into_request(self) -> PurchaseRequest {
        PurchaseRequest {
            product: self.product,
            price: self.price,
            buyer: self.buyer,
            shipper: self.shipper,
        }
    }
}

#[derive(Debug)]
pub enum PurchaseImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Purchase { row: usize, source: EstimateError },
}

impl std::fmt::Display for PurchaseImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PurchaseImportError::Io(err) => write!(f, "failed to read purchase list: {}", err),
            PurchaseImportError::Csv(err) => write!(f, "invalid purchase CSV data: {}", err),
            PurchaseImportError::Purchase { row, source } => {
                write!(f, "purchase on row {} rejected: {}", row, source)
            }
        }
    }
}

impl std::error::Error for PurchaseImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PurchaseImportError::Io(err) => Some(err),
            PurchaseImportError::Csv(err) => Some(err),
            PurchaseImportError::Purchase { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for PurchaseImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for PurchaseImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}
