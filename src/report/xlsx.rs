//! XLSX workbook report.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, Workbook, Worksheet, XlsxError};

use crate::dns::RecordQueryOutcome;
use crate::scan::ScanReport;
use crate::zone_transfer::ZoneTransferResult;

const RECORD_HEADERS: [&str; 4] = ["Domain", "Type", "Status", "Value"];
const TRANSFER_HEADERS: [&str; 4] = ["Domain", "Nameserver", "Result", "Records"];

/// Saves the report as a workbook with a `Records` and a `Zone Transfers` sheet.
pub fn write_workbook(report: &ScanReport, path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xD9E1F2));

    let records = workbook.add_worksheet();
    records.set_name("Records")?;
    write_headers(records, &RECORD_HEADERS, &header_format)?;
    let mut row = 1u32;
    for (domain, result) in report.iter() {
        for (record_type, outcome) in result.records.iter() {
            let (status, value) = match outcome {
                RecordQueryOutcome::Success(values) => ("ok", values.join(",")),
                RecordQueryOutcome::Failure(reason) => ("error", reason.clone()),
            };
            records.write_string(row, 0, domain)?;
            records.write_string(row, 1, record_type.to_string())?;
            records.write_string(row, 2, status)?;
            records.write_string(row, 3, value)?;
            row += 1;
        }
    }
    records.autofit();

    let transfers = workbook.add_worksheet();
    transfers.set_name("Zone Transfers")?;
    write_headers(transfers, &TRANSFER_HEADERS, &header_format)?;
    let mut row = 1u32;
    for (domain, result) in report.iter() {
        for (nameserver, transfer) in &result.transfers {
            let count = match transfer {
                ZoneTransferResult::Exposed(lines) => lines.len() as u32,
                _ => 0,
            };
            transfers.write_string(row, 0, domain)?;
            transfers.write_string(row, 1, nameserver)?;
            transfers.write_string(row, 2, transfer.label())?;
            transfers.write_number(row, 3, count)?;
            row += 1;
        }
    }
    transfers.autofit();

    workbook.save(path)
}

fn write_headers(sheet: &mut Worksheet, headers: &[&str], format: &Format) -> Result<(), XlsxError> {
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, format)?;
    }
    Ok(())
}
