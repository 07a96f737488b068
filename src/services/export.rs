use crate::{
    entities::bundle_arrival::Model,
    errors::ServiceError,
    ledger::{self, balance::format_amount, FilterSpec},
    services::arrivals::ArrivalService,
};
use chrono::Local;
use rust_decimal::prelude::ToPrimitive;
use tracing::instrument;

/// Column headers in table order. The serial column restarts from 1 on
/// every export, it is not the record id.
const HEADER: [&str; 14] = [
    "S.No",
    "Date",
    "Lorry",
    "LR No",
    "City",
    "Party Name",
    "A/c",
    "Bundle",
    "Invoice No",
    "Invoice Date",
    "Amount",
    "PH NO",
    "STATUS",
    "Itemtype",
];

/// Renders the filtered view as a CSV document.
#[derive(Clone)]
pub struct ExportService {
    arrivals: ArrivalService,
}

impl ExportService {
    pub fn new(arrivals: ArrivalService) -> Self {
        Self { arrivals }
    }

    /// Produces the CSV bytes: a synthetic opening-balance row, then the
    /// header, then the filtered records. The opening balance is computed
    /// over the whole collection regardless of the filter, matching what
    /// the table footer shows.
    #[instrument(skip(self, spec))]
    pub async fn export_csv(&self, spec: &FilterSpec) -> Result<Vec<u8>, ServiceError> {
        let records = self.arrivals.load_all().await?;
        let today = Local::now().date_naive();
        let balances = ledger::compute_balances(&records, today);
        let filtered = ledger::apply_filters(&records, spec);

        render_csv(&filtered, balances.opening_balance)
            .map_err(|e| ServiceError::InternalError(format!("csv render failed: {e}")))
    }
}

fn render_csv(rows: &[Model], opening_balance: f64) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut opening_row = vec![""; 14];
    opening_row[5] = "Opening Balance";
    let opening_amount = format_amount(opening_balance);
    opening_row[10] = &opening_amount;
    writer.write_record(&opening_row)?;

    writer.write_record(HEADER)?;

    for (index, record) in rows.iter().enumerate() {
        writer.write_record(data_row(index as u64 + 1, record))?;
    }

    writer.flush()?;
    Ok(writer.into_inner().unwrap_or_default())
}

fn data_row(serial: u64, record: &Model) -> Vec<String> {
    vec![
        serial.to_string(),
        record.date.format("%d/%m/%Y").to_string(),
        record.lorry_type.clone(),
        record.lorry_no.clone(),
        record.city.clone(),
        record.party_name.clone(),
        record.account_type.display_label().to_string(),
        record.bundle.clone(),
        record.invoice_no.clone(),
        record.invoice_date.format("%d/%m/%Y").to_string(),
        format_amount(record.amount.to_f64().unwrap_or(0.0)),
        record.phone_no.clone().unwrap_or_default(),
        record
            .status
            .map(|s| s.as_str().to_string())
            .unwrap_or_default(),
        record.itemtype.clone().unwrap_or_default(),
    ]
}
