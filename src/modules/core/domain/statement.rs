//! Parameterized search statement construction
//!
//! User input never reaches the statement text: each predicate appends
//! placeholders and the matching arguments in lock-step.

use breed_inquiry_types::{Breed, Connector};

use super::filter::SearchFilter;

/// Table queried by the breed search
pub const BREED_TABLE: &str = "breed";

/// A composed statement together with its bind arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatement {
    sql: String,
    args: Vec<String>,
    predicates: usize,
}

impl SearchStatement {
    /// Build the breed search statement for a filter
    ///
    /// Predicates are appended in a fixed order: keyword, ids, short names.
    pub fn for_filter(filter: &SearchFilter, connector: Connector) -> Self {
        let mut builder = StatementBuilder::select(connector, &Breed::COLUMNS, BREED_TABLE);

        if let Some(keyword) = filter.keyword() {
            builder.and_any_contains(&["name_th", "name_en"], keyword);
        }
        if !filter.ids().is_empty() {
            builder.and_in("id", filter.ids());
        }
        if !filter.short_names().is_empty() {
            builder.and_in("short_name", filter.short_names());
        }

        builder.build()
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Number of predicates joined onto the base `WHERE 1=1`
    pub fn predicate_count(&self) -> usize {
        self.predicates
    }
}

/// Incremental builder for `SELECT ... WHERE 1=1 AND ...` statements
#[derive(Debug)]
pub struct StatementBuilder {
    connector: Connector,
    sql: String,
    args: Vec<String>,
    predicates: usize,
}

impl StatementBuilder {
    /// Start a statement selecting `columns` from `table` with no predicates
    pub fn select(connector: Connector, columns: &[&str], table: &str) -> Self {
        Self {
            connector,
            sql: format!("SELECT {} FROM {} WHERE 1=1", columns.join(", "), table),
            args: Vec::new(),
            predicates: 0,
        }
    }

    /// `AND (c1 LIKE ? OR c2 LIKE ? ...)` matching `needle` as a substring
    ///
    /// `%` and `_` inside `needle` keep their `LIKE` meaning.
    pub fn and_any_contains(&mut self, columns: &[&str], needle: &str) -> &mut Self {
        let pattern = format!("%{}%", needle);
        let alternatives: Vec<String> = columns
            .iter()
            .map(|column| format!("{} LIKE {}", column, self.bind(pattern.clone())))
            .collect();

        self.push_predicate(format!("({})", alternatives.join(" OR ")))
    }

    /// `AND column IN (?, ?, ...)`; an empty set adds nothing
    pub fn and_in(&mut self, column: &str, values: &[String]) -> &mut Self {
        if values.is_empty() {
            return self;
        }

        let placeholders: Vec<String> = values.iter().map(|v| self.bind(v.clone())).collect();

        self.push_predicate(format!("{} IN ({})", column, placeholders.join(", ")))
    }

    /// Finish the statement
    pub fn build(self) -> SearchStatement {
        SearchStatement {
            sql: self.sql,
            args: self.args,
            predicates: self.predicates,
        }
    }

    fn bind(&mut self, value: String) -> String {
        self.args.push(value);
        self.connector.placeholder(self.args.len())
    }

    fn push_predicate(&mut self, predicate: String) -> &mut Self {
        self.sql.push_str(" AND ");
        self.sql.push_str(&predicate);
        self.predicates += 1;
        self
    }
}
