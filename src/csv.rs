// src/csv.rs
use std::io::{Read, Write};

use crate::error::Result;

/// Shortest text that parses back to the same value: `12.0` → "12", `0.301` → "0.301".
pub fn format_value(v: f64) -> String {
    v.to_string()
}

/* ---------------- Writing ---------------- */

/// Header line, then one line per row. Fields with commas, quotes or line
/// breaks are quoted.
pub fn write_rows<W: Write>(w: W, headers: &[String], rows: &[Vec<String>]) -> Result<()> {
    let mut out = ::csv::WriterBuilder::new().flexible(false).from_writer(w);
    out.write_record(headers)?;
    for row in rows {
        out.write_record(row)?;
    }
    out.flush().map_err(::csv::Error::from)?;
    Ok(())
}

pub fn rows_to_string(headers: &[String], rows: &[Vec<String>]) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_rows(&mut buf, headers, rows)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/* ---------------- Parsing ---------------- */

/// First record is the header. Rows must all have the header's width.
pub fn parse_rows<R: Read>(r: R) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut rdr = ::csv::ReaderBuilder::new().has_headers(true).from_reader(r);
    let headers: Vec<String> = rdr.headers()?.iter().map(String::from).collect();

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(rec.iter().map(String::from).collect());
    }
    Ok((headers, rows))
}
