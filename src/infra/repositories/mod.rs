//! Domain repositories built on the storage adapter.
//!
//! All SQL is written with canonical `$N` placeholders and bound
//! positionally; the adapter owns the backend-specific rewrite. Partial
//! updates are assembled from fixed column-name literals only, so request
//! data never reaches the SQL text.

pub mod categories;
pub mod orders;
pub mod products;

pub use categories::CategoryRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;

/// Build a partial UPDATE statement from the present columns.
///
/// The id is bound as the last positional parameter.
fn build_update(table: &str, columns: &[&str]) -> String {
    let assignments = columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{} = ${}", col, i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {} WHERE id = ${}",
        table,
        assignments,
        columns.len() + 1
    )
}

#[cfg(test)]
mod tests {
    use super::build_update;

    #[test]
    fn update_statement_binds_id_last() {
        assert_eq!(
            build_update("categories", &["name", "icon"]),
            "UPDATE categories SET name = $1, icon = $2 WHERE id = $3"
        );
        assert_eq!(
            build_update("products", &["price"]),
            "UPDATE products SET price = $1 WHERE id = $2"
        );
    }
}
