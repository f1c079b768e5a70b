//! SELECT builder with positional parameters
//!
//! Postgres binds parameters by position (`$1`, `$2`, ...). Instead of
//! tracking indices by hand, each [`Predicate`] carries its own SQL fragment
//! with `?` slots and the values for those slots. [`SelectQuery::build`]
//! walks the clauses in output order (WHERE, HAVING, LIMIT), numbering slots
//! and collecting values in the same pass, so a placeholder index always
//! matches its position in the parameter list.
//!
//! Fragments are trusted SQL written in this crate. User input only ever
//! travels through parameters.

use std::fmt;

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

/// A value bound to a positional parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for SqlParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "'{}'", s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for SqlParam {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for SqlParam {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// One filter condition plus the values for its `?` slots
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    fragment: String,
    params: Vec<SqlParam>,
}

impl Predicate {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            params: Vec::new(),
        }
    }

    /// Supply the value for the next unfilled `?` slot.
    pub fn bind(mut self, value: impl Into<SqlParam>) -> Self {
        self.params.push(value.into());
        self
    }

    fn slot_count(&self) -> usize {
        self.fragment.matches('?').count()
    }

    /// Append this predicate to `sql`, numbering its slots from
    /// `params.len() + 1` and moving its values into `params`.
    fn render_into(self, sql: &mut String, params: &mut Vec<SqlParam>) {
        debug_assert_eq!(
            self.slot_count(),
            self.params.len(),
            "predicate '{}' has mismatched slots",
            self.fragment
        );

        let mut values = self.params.into_iter();
        for ch in self.fragment.chars() {
            match ch {
                '?' => match values.next() {
                    Some(value) => {
                        params.push(value);
                        sql.push('$');
                        sql.push_str(&params.len().to_string());
                    }
                    None => sql.push(ch),
                },
                _ => sql.push(ch),
            }
        }
    }
}

/// Rendered SQL text with its ordered parameter list
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl BuiltQuery {
    /// Prepare a typed sqlx query with every parameter bound in order.
    pub fn query_as<'q, O>(&'q self) -> QueryAs<'q, Postgres, O, PgArguments>
    where
        O: for<'r> FromRow<'r, PgRow>,
    {
        let mut query = sqlx::query_as(&self.sql);
        for param in &self.params {
            query = match param {
                SqlParam::Text(s) => query.bind(s.as_str()),
                SqlParam::Int(i) => query.bind(*i),
                SqlParam::Float(x) => query.bind(*x),
            };
        }
        query
    }
}

/// SELECT statement assembled clause by clause
#[derive(Debug, Clone, Default)]
pub struct SelectQuery {
    columns: String,
    from: String,
    filters: Vec<Predicate>,
    group_by: Option<String>,
    having: Vec<Predicate>,
    order_by: Option<String>,
    limit: Option<i64>,
}

impl SelectQuery {
    /// Start a query selecting `columns` from `from` (which may include joins).
    pub fn new(columns: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            columns: columns.into(),
            from: from.into(),
            ..Default::default()
        }
    }

    /// Add a WHERE condition; conditions are joined with AND.
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.filters.push(predicate);
        self
    }

    pub fn group_by(mut self, columns: impl Into<String>) -> Self {
        self.group_by = Some(columns.into());
        self
    }

    /// Add a HAVING condition, evaluated after aggregation.
    pub fn having(mut self, predicate: Predicate) -> Self {
        self.having.push(predicate);
        self
    }

    pub fn order_by(mut self, columns: impl Into<String>) -> Self {
        self.order_by = Some(columns.into());
        self
    }

    /// Cap the row count; bound as the final parameter.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn build(self) -> BuiltQuery {
        let mut sql = format!("SELECT {}\nFROM {}", self.columns, self.from);
        let mut params = Vec::new();

        render_clause(&mut sql, &mut params, "WHERE", self.filters);

        if let Some(group_by) = &self.group_by {
            sql.push_str("\nGROUP BY ");
            sql.push_str(group_by);
        }

        render_clause(&mut sql, &mut params, "HAVING", self.having);

        if let Some(order_by) = &self.order_by {
            sql.push_str("\nORDER BY ");
            sql.push_str(order_by);
        }

        if let Some(limit) = self.limit {
            Predicate::new("\nLIMIT ?")
                .bind(limit)
                .render_into(&mut sql, &mut params);
        }

        BuiltQuery { sql, params }
    }
}

fn render_clause(
    sql: &mut String,
    params: &mut Vec<SqlParam>,
    keyword: &str,
    predicates: Vec<Predicate>,
) {
    for (i, predicate) in predicates.into_iter().enumerate() {
        if i == 0 {
            sql.push('\n');
            sql.push_str(keyword);
            sql.push(' ');
        } else {
            sql.push_str(" AND ");
        }
        predicate.render_into(sql, params);
    }
}
