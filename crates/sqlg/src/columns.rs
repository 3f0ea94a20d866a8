//! Column lists derived from record types.

/// Record types that know which columns to select.
///
/// Usually derived:
///
/// ```ignore
/// use sqlg::Columns;
///
/// #[derive(Columns)]
/// struct UserRow {
///     id: i64,
///     #[sqlg(column = "user_name")]
///     name: String,
///     #[sqlg(skip)]
///     cache: Option<String>,
///     #[sqlg(expr = "COUNT(order_id) AS orders")]
///     orders: i64,
/// }
///
/// assert_eq!(UserRow::columns(), vec!["id", "user_name", "COUNT(order_id) AS orders"]);
/// ```
///
/// Names are returned unquoted; the generator quotes them when rendering. Entries containing a
/// space or `(` are emitted verbatim.
pub trait Columns {
    /// Column names or expressions, in select-list order.
    fn columns() -> Vec<String>;
}

impl<T: Columns> Columns for &T {
    fn columns() -> Vec<String> {
        T::columns()
    }
}

impl<T: Columns> Columns for Box<T> {
    fn columns() -> Vec<String> {
        T::columns()
    }
}
