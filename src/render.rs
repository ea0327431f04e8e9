use crate::tables::{TABLE_LEN, TableSet};

/// Default elements per line in the emitted declarations.
pub const DEFAULT_COLUMNS: usize = 8;

/// How a single table entry is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementFormat {
    /// C single-quoted character literal, e.g. `'A'`
    CharLiteral,
    /// Bare decimal integer, e.g. `26`
    Decimal,
}

fn format_element(byte: u8, format: ElementFormat) -> String {
    match format {
        ElementFormat::CharLiteral => match byte {
            b'\'' => String::from("'\\''"),
            b'\\' => String::from("'\\\\'"),
            _ => format!("'{}'", byte as char),
        },
        ElementFormat::Decimal => byte.to_string(),
    }
}

/// Renders one table as a C static array declaration.
///
/// Elements are emitted in index order 0..255, comma separated, `columns`
/// per line with each element prefixed by a tab, and no separator after
/// the final element. The emitted text parses as a C array literal with
/// exactly 256 elements.
///
/// # Panics
///
/// Panics if `columns` is zero.
pub fn render_table(
    name: &str,
    table: &[u8; TABLE_LEN],
    format: ElementFormat,
    columns: usize,
) -> String {
    assert!(columns > 0, "columns must be nonzero");

    let mut out = String::new();
    out.push_str("static unsigned char ");
    out.push_str(name);
    out.push_str("[] = {\n");

    for (i, &byte) in table.iter().enumerate() {
        out.push('\t');
        out.push_str(&format_element(byte, format));
        if i + 1 == table.len() {
            out.push('\n');
        } else if (i + 1) % columns == 0 {
            out.push_str(" ,\n");
        } else {
            out.push_str(" , ");
        }
    }

    out.push_str("};\n");
    out
}

/// Renders the forward and inverse declarations for one variant.
///
/// `label` is the caller-supplied variant name used in the array
/// identifiers: `binary_to_ascii_<label>_table` for the forward table and
/// `ascii_to_binary_<label>_table` for the inverse table.
pub fn render_variant(label: &str, tables: &TableSet, columns: usize) -> String {
    let mut out = String::new();
    out.push_str(&render_table(
        &format!("binary_to_ascii_{}_table", label),
        &tables.forward,
        ElementFormat::CharLiteral,
        columns,
    ));
    out.push_str(&render_table(
        &format!("ascii_to_binary_{}_table", label),
        &tables.inverse,
        ElementFormat::Decimal,
        columns,
    ));
    out
}
