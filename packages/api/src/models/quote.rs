//! Quote model.

/// Row from the `quotes` collection. `date` is a `YYYY-MM-DD` string and is
/// matched by equality against the local wall-clock date key; at most one row
/// per date is expected.
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub id: i64,
    pub date: String,
    pub quote: String,
}
