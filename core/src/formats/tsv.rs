/// Tab-separated excel tables (`global/excel/*.txt`)
use super::FormatError;
use crate::encoding::Newline;
use indexmap::IndexMap;
use std::fmt;

/// One data row, keyed by header in column order.
pub type TsvRow = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<TsvRow>,
    pub newline: Newline,
    pub trailing_newline: bool,
}

impl TsvTable {
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let newline = Newline::detect(text.as_bytes());
        let trailing_newline = text.ends_with('\n');
        let mut lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line));

        let headers: Vec<String> = match lines.next() {
            Some(line) if !line.is_empty() => line.split('\t').map(str::to_string).collect(),
            _ => return Err(FormatError::ParseError("table has no header row".into())),
        };
        for (index, header) in headers.iter().enumerate() {
            if headers[..index].contains(header) {
                return Err(FormatError::ParseError(format!(
                    "duplicate column `{header}`"
                )));
            }
        }

        let mut rows = Vec::new();
        for (number, line) in lines.enumerate() {
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.iter().skip(headers.len()).any(|field| !field.is_empty()) {
                return Err(FormatError::ParseError(format!(
                    "row {} has {} fields but the header has {}",
                    number + 1,
                    fields.len(),
                    headers.len()
                )));
            }

            let row = headers
                .iter()
                .enumerate()
                .map(|(index, header)| {
                    let value = fields.get(index).copied().unwrap_or_default();
                    (header.clone(), value.to_string())
                })
                .collect();
            rows.push(row);
        }

        Ok(Self {
            headers,
            rows,
            newline,
            trailing_newline,
        })
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|header| header == column)
    }

    /// Rows whose `code` column is one of `codes`.
    pub fn rows_with_code<'a>(
        &'a mut self,
        codes: &'a [String],
    ) -> impl Iterator<Item = &'a mut TsvRow> + 'a {
        self.rows.iter_mut().filter(move |row| {
            row.get("code")
                .is_some_and(|code| codes.iter().any(|wanted| wanted == code))
        })
    }
}

impl fmt::Display for TsvTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let newline = self.newline.as_str();
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(self.headers.join("\t"));
        for row in &self.rows {
            let fields: Vec<&str> = self
                .headers
                .iter()
                .map(|header| row.get(header).map(String::as_str).unwrap_or_default())
                .collect();
            lines.push(fields.join("\t"));
        }

        f.write_str(&lines.join(newline))?;
        if self.trailing_newline {
            f.write_str(newline)?;
        }
        Ok(())
    }
}
