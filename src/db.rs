use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::Connection;
use tracing::{debug, warn};

use crate::error::Result;

/// Columns read in order; each pair is attempted independently.
pub const SOURCE_COLUMNS: &[(&str, &str)] = &[
    ("cards", "question"),
    ("cards", "answer"),
    ("data_for_fact", "value"),
];

pub fn connect(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    Ok(conn)
}

/// Read every configured column, skipping pairs that fail to read.
/// The connection is closed once all pairs have been attempted.
pub fn read_candidates(conn: Connection) -> Vec<String> {
    let mut candidates = Vec::new();
    for (table, column) in SOURCE_COLUMNS {
        match fetch_text(&conn, table, column) {
            Ok(values) => {
                debug!(table, column, cells = values.len(), "read column");
                candidates.extend(values);
            }
            Err(e) => debug!(table, column, error = %e, "skipping column"),
        }
    }
    if let Err((_, e)) = conn.close() {
        warn!(error = %e, "failed to close database");
    }
    candidates
}

/// All non-empty, trimmed text values of `table.column` in engine order.
pub fn fetch_text(
    conn: &Connection,
    table: &str,
    column: &str,
) -> std::result::Result<Vec<String>, rusqlite::Error> {
    let sql = format!("SELECT {} FROM {}", column, table);
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let Some(text) = cell_text(row.get_ref(0)?)? else {
            continue;
        };
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_string());
        }
    }
    Ok(out)
}

/// TEXT must be valid UTF-8; only BLOBs are decoded lossily.
fn cell_text(value: ValueRef<'_>) -> std::result::Result<Option<String>, rusqlite::Error> {
    let text = match value {
        ValueRef::Null => return Ok(None),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => format_real(f),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .map_err(rusqlite::Error::Utf8Error)?
            .to_string(),
        ValueRef::Blob(bytes) => decode_lossy(bytes),
    };
    Ok(Some(text))
}

/// UTF-8 decode that drops invalid byte sequences instead of failing.
pub fn decode_lossy(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|c| c.valid()).collect()
}

/// Shortest round-trip form: fixed notation for exponents in -4..16,
/// otherwise `<mantissa>e<sign><at least two digits>` (`1e+20`, `1.5e-05`).
pub fn format_real(f: f64) -> String {
    if f.is_nan() {
        return "nan".into();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf".into() } else { "-inf".into() };
    }

    let sci = format!("{:e}", f);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(m) => ("-", m),
        None => ("", mantissa),
    };

    if !(-4..16).contains(&exp) {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        return format!("{}{}e{}{:02}", sign, mantissa, exp_sign, exp.abs());
    }

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let body = if exp < 0 {
        format!("0.{}{}", "0".repeat((-exp - 1) as usize), digits)
    } else {
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            format!("{}{}.0", digits, "0".repeat(int_len - digits.len()))
        } else {
            format!("{}.{}", &digits[..int_len], &digits[int_len..])
        }
    };
    format!("{}{}", sign, body)
}
