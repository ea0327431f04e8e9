mod alphabet;
mod config;
mod errors;
mod render;
mod tables;

pub use alphabet::Alphabet;
pub use config::{VariantConfig, VariantsConfig};
pub use errors::{AlphabetError, VariantNotFoundError, find_closest_variant};
pub use render::{DEFAULT_COLUMNS, ElementFormat, render_table, render_variant};
pub use tables::{TABLE_LEN, TableSet, forward_table, inverse_table};

/// Derives both tables for an alphabet and renders them as C declarations.
pub fn generate(label: &str, alphabet: &Alphabet, columns: usize) -> String {
    let tables = TableSet::derive(alphabet);
    render::render_variant(label, &tables, columns)
}

#[cfg(test)]
mod tests;
