use std::path::Path;

use crate::error::CompareError;
use crate::input::reader::open_maybe_gz;

/// A parsed, non-blank line together with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub line_no: usize,
    pub values: Vec<f64>,
}

pub fn read_rows(path: &Path) -> Result<Vec<ParsedRow>, CompareError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    let mut rows = Vec::new();
    let mut line_no = 0usize;
    let mut pending_blank: Option<usize> = None;

    loop {
        buf.clear();
        let read = reader
            .read_line(&mut buf)
            .map_err(|e| CompareError::io(path, e))?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim();
        if line.is_empty() {
            pending_blank.get_or_insert(line_no);
            continue;
        }
        // Only trailing blank lines are tolerated.
        if let Some(blank) = pending_blank {
            return Err(CompareError::Parse {
                path: path.to_path_buf(),
                line: blank,
                msg: "blank line between rows".to_string(),
            });
        }
        let values = parse_row(line).map_err(|msg| CompareError::Parse {
            path: path.to_path_buf(),
            line: line_no,
            msg,
        })?;
        rows.push(ParsedRow { line_no, values });
    }

    Ok(rows)
}

pub fn parse_row(line: &str) -> Result<Vec<f64>, String> {
    line.split(',')
        .enumerate()
        .map(|(col, token)| {
            let token = token.trim();
            token
                .parse::<f64>()
                .map_err(|_| format!("column {}: {:?} is not a number", col + 1, token))
        })
        .collect()
}

pub fn format_row(values: &[f64]) -> String {
    let mut out = String::new();
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&v.to_string());
    }
    out
}
