//! Minimal CSV writer for table exports.
//!
//! Follows RFC 4180 quoting: a field is wrapped in double quotes when it
//! contains a comma, a double quote, CR or LF, and embedded quotes are
//! doubled. Lines end with `\n`.

/// Render a header row followed by one line per record.
pub fn render<H, R, F>(header: &[H], rows: R) -> String
where
    H: AsRef<str>,
    R: IntoIterator<Item = Vec<F>>,
    F: AsRef<str>,
{
    let mut out = String::new();
    push_record(&mut out, header);
    for row in rows {
        push_record(&mut out, &row);
    }
    out
}

fn push_record<T: AsRef<str>>(out: &mut String, fields: &[T]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field.as_ref());
    }
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\r', '\n']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
