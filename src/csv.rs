// src/csv.rs
// Delimited text for the report table. Cells are quoted only when they hold
// the separator, a quote or a line break.

fn push_cell(out: &mut String, cell: &str, sep: char) {
    if cell.contains([sep, '"', '\n', '\r']) {
        out.push('"');
        out.push_str(&cell.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(cell);
    }
}

/// Append one row, newline-terminated.
pub fn push_row<S: AsRef<str>>(out: &mut String, row: &[S], sep: char) {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            out.push(sep);
        }
        push_cell(out, cell.as_ref(), sep);
    }
    out.push('\n');
}

/// Header line (if any) followed by every row.
pub fn to_delimited<H, S>(headers: Option<&[H]>, rows: &[Vec<S>], sep: char) -> String
where
    H: AsRef<str>,
    S: AsRef<str>,
{
    let mut out = String::new();
    if let Some(h) = headers {
        push_row(&mut out, h, sep);
    }
    for row in rows {
        push_row(&mut out, row, sep);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let out = to_delimited::<&str, _>(None, &[vec!["plain", "a,b", "say \"hi\""]], ',');
        assert_eq!(out, "plain,\"a,b\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn tab_separator_leaves_commas_alone() {
        let out = to_delimited(Some(&["signal", "note"][..]), &[vec!["schema", "a,b"]], '\t');
        assert_eq!(out, "signal\tnote\nschema\ta,b\n");
    }

    #[test]
    fn line_breaks_are_quoted() {
        let mut out = String::new();
        push_row(&mut out, &["a\nb"], ';');
        assert_eq!(out, "\"a\nb\"\n");
    }
}
