//! Select query construction for PostgREST tables.

// ============================================================================
// Sort Configuration
// ============================================================================

/// Sort direction for ordered selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    /// PostgREST order suffix.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

// ============================================================================
// Select Query
// ============================================================================

/// A select over one table: equality filters plus an optional order
/// clause, rendered as PostgREST query parameters.
#[derive(Debug, Clone, Default)]
pub struct SelectQuery {
    filters: Vec<(String, String)>,
    order: Option<(String, SortDirection)>,
}

impl SelectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep rows where `column` equals `value`. Matching is exact and
    /// case-sensitive.
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    /// Order rows by `column`.
    pub fn order_by(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.order = Some((column.into(), direction));
        self
    }

    /// Render as query parameters. All columns are always selected.
    pub(crate) fn into_params(self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        for (column, value) in self.filters {
            params.push((column, format!("eq.{}", value)));
        }
        if let Some((column, direction)) = self.order {
            params.push((
                "order".to_string(),
                format!("{}.{}", column, direction.suffix()),
            ));
        }
        params
    }
}
