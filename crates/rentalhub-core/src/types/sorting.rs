//! Sort-key lists for list endpoints.
//!
//! A [`SortSpec`] is an ordered list of keys applied in priority order: the
//! second key only breaks ties left by the first, and so on. Every spec ends
//! with the entity's tie-breaker key so results are fully ordered.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Return the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Parse the `sort` query parameter (`asc` or `desc`, any case).
    pub fn parse(raw: &str) -> AppResult<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(AppError::validation(format!(
                "Invalid sort direction '{raw}'. Expected 'asc' or 'desc'"
            ))),
        }
    }

    /// Orient an ascending comparison result.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// A sortable column of some listing.
pub trait SortKey: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Key appended to every spec as the final tie-breaker.
    const TIE_BREAKER: Self;

    /// Keys applied by the `sort=asc|desc` shorthand.
    fn default_keys() -> &'static [Self];

    /// Keys applied when the request asks for no ordering at all.
    fn natural_keys() -> &'static [Self] {
        &[]
    }

    /// Look up a key by its public field name.
    fn from_name(name: &str) -> Option<Self>;

    /// Public field name, as accepted by [`SortKey::from_name`].
    fn name(&self) -> &'static str;

    /// Fully qualified SQL column for `ORDER BY`.
    fn column(&self) -> &'static str;
}

/// A single sort key with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortField<K> {
    /// Column to sort by.
    pub key: K,
    /// Sort direction.
    pub direction: SortDirection,
}

impl<K> SortField<K> {
    /// Create a new sort field.
    pub fn new(key: K, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Create an ascending sort on the given key.
    pub fn asc(key: K) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    /// Create a descending sort on the given key.
    pub fn desc(key: K) -> Self {
        Self::new(key, SortDirection::Desc)
    }
}

/// Ordered list of sort keys, always terminated by the tie-breaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec<K: SortKey> {
    fields: Vec<SortField<K>>,
}

impl<K: SortKey> SortSpec<K> {
    /// Build a spec from explicit fields. Duplicate keys keep their first
    /// position; the tie-breaker is appended when missing.
    pub fn new(fields: impl IntoIterator<Item = SortField<K>>) -> Self {
        let mut deduped: Vec<SortField<K>> = Vec::new();
        for field in fields {
            if !deduped.iter().any(|f| f.key == field.key) {
                deduped.push(field);
            }
        }
        if !deduped.iter().any(|f| f.key == K::TIE_BREAKER) {
            deduped.push(SortField::asc(K::TIE_BREAKER));
        }
        Self { fields: deduped }
    }

    /// Build a spec from the `sort` and `order_by` query parameters.
    ///
    /// - `order_by=title,-release_date` lists keys explicitly; a `-` prefix
    ///   sorts that key descending, otherwise the `sort` direction applies.
    /// - `sort=asc|desc` alone applies [`SortKey::default_keys`].
    /// - Neither parameter yields [`SortKey::natural_keys`].
    pub fn from_query(sort: Option<&str>, order_by: Option<&str>) -> AppResult<Self> {
        let direction = sort
            .filter(|s| !s.trim().is_empty())
            .map(|s| SortDirection::parse(s.trim()))
            .transpose()?;

        if let Some(order_by) = order_by.filter(|s| !s.trim().is_empty()) {
            let base = direction.unwrap_or_default();
            let mut fields = Vec::new();
            for raw in order_by.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                let (name, dir) = match raw.strip_prefix('-') {
                    Some(name) => (name, SortDirection::Desc),
                    None => (raw, base),
                };
                let key = K::from_name(name)
                    .ok_or_else(|| AppError::validation(format!("Unknown sort field '{name}'")))?;
                fields.push(SortField::new(key, dir));
            }
            return Ok(Self::new(fields));
        }

        let fields = match direction {
            Some(dir) => K::default_keys()
                .iter()
                .map(|k| SortField::new(*k, dir))
                .collect::<Vec<_>>(),
            None => K::natural_keys().iter().map(|k| SortField::asc(*k)).collect(),
        };
        Ok(Self::new(fields))
    }

    /// The keys in priority order.
    pub fn fields(&self) -> &[SortField<K>] {
        &self.fields
    }

    /// Render as an SQL `ORDER BY` body, e.g. `title ASC, id ASC`.
    ///
    /// Column names come from [`SortKey::column`], never from user input.
    pub fn to_sql(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("{} {}", f.key.column(), f.direction.as_sql()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Compare two rows key by key using an ascending per-key comparator.
    pub fn compare<T>(&self, a: &T, b: &T, by_key: impl Fn(&T, &T, K) -> Ordering) -> Ordering {
        self.fields
            .iter()
            .map(|f| f.direction.apply(by_key(a, b, f.key)))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Sort rows in place.
    pub fn sort<T>(&self, rows: &mut [T], by_key: impl Fn(&T, &T, K) -> Ordering) {
        rows.sort_by(|a, b| self.compare(a, b, &by_key));
    }
}

impl<K: SortKey> Default for SortSpec<K> {
    fn default() -> Self {
        Self::new(K::natural_keys().iter().map(|k| SortField::asc(*k)))
    }
}
