//! Query builder for the tabular REST protocol's filter dialect.
//!
//! Predicates are query parameters: `tecnico_id=eq.<uuid>`,
//! `fim=is.null`, `qtd_campos=gte.10`, plus `select=`, `order=` and
//! `limit=`. The builder renders to ordered key/value pairs; URL encoding is
//! left to the HTTP client.

/// Sort direction for `order=` clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Asc,
    Desc,
}

impl Dir {
    fn suffix(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// An ordered set of query parameters forming one read/write condition.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    pairs: Vec<(String, String)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a filter with a `select=` column list.
    pub fn select(columns: &str) -> Self {
        Self::new().pair("select", columns)
    }

    /// Equality predicate: `column=eq.value`.
    pub fn eq(self, column: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        self.pair(column, format!("eq.{value}"))
    }

    /// Null check: `column=is.null`.
    pub fn is_null(self, column: &str) -> Self {
        self.pair(column, "is.null")
    }

    /// Boolean check: `column=is.true`.
    pub fn is_true(self, column: &str) -> Self {
        self.pair(column, "is.true")
    }

    /// Greater-than-or-equal predicate: `column=gte.value`.
    pub fn gte(self, column: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        self.pair(column, format!("gte.{value}"))
    }

    /// Less-than-or-equal predicate: `column=lte.value`.
    pub fn lte(self, column: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        self.pair(column, format!("lte.{value}"))
    }

    /// Ordering clause: `order=column.asc|desc`.
    pub fn order(self, column: &str, dir: Dir) -> Self {
        self.pair("order", format!("{column}.{}", dir.suffix()))
    }

    /// Row limit: `limit=n`.
    pub fn limit(self, n: usize) -> Self {
        self.pair("limit", n.to_string())
    }

    /// The rendered query pairs, in insertion order.
    pub fn as_query(&self) -> &[(String, String)] {
        &self.pairs
    }

    fn pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(filter: &Filter) -> Vec<(&str, &str)> {
        filter
            .as_query()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn select_and_predicates_render_in_order() {
        let filter = Filter::select("id,nome_tabela")
            .is_null("tecnico_id")
            .eq("status_api", "Pendente");

        assert_eq!(
            rendered(&filter),
            vec![
                ("select", "id,nome_tabela"),
                ("tecnico_id", "is.null"),
                ("status_api", "eq.Pendente"),
            ]
        );
    }

    #[test]
    fn range_predicates() {
        let filter = Filter::new().gte("qtd_campos", 10).lte("qtd_campos", 40);
        assert_eq!(
            rendered(&filter),
            vec![("qtd_campos", "gte.10"), ("qtd_campos", "lte.40")]
        );
    }

    #[test]
    fn order_limit_and_boolean() {
        let filter = Filter::new()
            .is_true("ativo")
            .order("qtd_campos", Dir::Desc)
            .limit(1);
        assert_eq!(
            rendered(&filter),
            vec![("ativo", "is.true"), ("order", "qtd_campos.desc"), ("limit", "1")]
        );
    }

    #[test]
    fn eq_accepts_any_displayable_value() {
        let id = uuid::Uuid::nil();
        let filter = Filter::new().eq("tecnico_id", id).eq("id", 42_i64);
        assert_eq!(
            rendered(&filter),
            vec![
                ("tecnico_id", "eq.00000000-0000-0000-0000-000000000000"),
                ("id", "eq.42"),
            ]
        );
    }
}
