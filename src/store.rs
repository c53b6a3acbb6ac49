//! Reading and writing the comma separated backing file.

use std::io::{Read, Write};

use anyhow::{bail, Context, Result};
use log::debug;

use crate::record::Record;

/// Header line of the backing file.
pub const HEADER: [&str; 3] = ["Date", "Description", "Amount"];

/// How strictly `read_records` treats malformed input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadMode {
    /// Skips rows with the wrong number of fields and accepts any header.
    #[default]
    Lenient,
    /// Rejects a bad header and rows with the wrong number of fields.
    Strict,
}

pub fn check_header(got: &csv::StringRecord) -> Result<()> {
    if got.iter().ne(HEADER.iter().copied()) {
        bail!(
            "bad header record, want {:?}, got {:?}",
            HEADER.join(","),
            got.iter().collect::<Vec<_>>().join(",")
        );
    }
    Ok(())
}

/// Reads records from `reader`, appending them to `records` as they are
/// parsed. On error, the records read before the failing row are left in
/// `records`.
pub fn read_records<R: Read>(reader: R, mode: LoadMode, records: &mut Vec<Record>) -> Result<()> {
    let mut csv_rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut csv_records = csv_rdr.records();

    match csv_records.next() {
        Some(header) => {
            let header = header?;
            if mode == LoadMode::Strict {
                check_header(&header)?;
            }
        }
        None => return Ok(()),
    }

    for result in csv_records {
        let str_record = result?;
        let line = str_record.position().map_or(0, csv::Position::line);
        if str_record.len() != HEADER.len() {
            if mode == LoadMode::Strict {
                bail!(
                    "line {}: expected {} fields, got {}",
                    line,
                    HEADER.len(),
                    str_record.len()
                );
            }
            debug!(
                "skipping line {} with {} fields",
                line,
                str_record.len()
            );
            continue;
        }
        let row: de::Row = str_record
            .deserialize(None)
            .with_context(|| format!("parsing line {}", line))?;
        records.push(row.into());
    }

    Ok(())
}

/// Writes the header followed by one row per record.
pub fn write_records<'a, W, I>(writer: W, records: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    let mut csv_wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    csv_wtr.write_record(HEADER)?;
    for record in records {
        csv_wtr.write_record([
            record.date_string(),
            record.description().to_string(),
            record.amount().to_string(),
        ])?;
    }
    csv_wtr.flush()?;
    Ok(())
}

mod de {
    use std::fmt;

    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use serde::{de, Deserializer};
    use serde_derive::Deserialize;

    use crate::record::{parse_amount, Record, DATE_FORMAT};

    #[derive(Debug, Deserialize)]
    pub struct Row {
        pub date: Date,
        pub description: String,
        pub amount: Amount,
    }

    impl From<Row> for Record {
        fn from(row: Row) -> Record {
            Record::new(row.date.0, row.description, row.amount.0)
        }
    }

    #[derive(Debug)]
    pub struct Date(pub NaiveDate);

    impl<'de> serde::Deserialize<'de> for Date {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            d.deserialize_str(DateVisitor)
        }
    }

    struct DateVisitor;
    impl<'de> de::Visitor<'de> for DateVisitor {
        type Value = Date;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a date string in \"YYYY-MM-DD\" format")
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
            NaiveDate::parse_from_str(s, DATE_FORMAT)
                .map(Date)
                .map_err(de::Error::custom)
        }
    }

    #[derive(Debug)]
    pub struct Amount(pub Decimal);

    impl<'de> serde::Deserialize<'de> for Amount {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            d.deserialize_str(AmountVisitor)
        }
    }

    struct AmountVisitor;
    impl<'de> de::Visitor<'de> for AmountVisitor {
        type Value = Amount;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a decimal number with a '.' separator")
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
            parse_amount(s.trim())
                .map(Amount)
                .map_err(de::Error::custom)
        }
    }
}
