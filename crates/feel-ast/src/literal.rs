//! Literal AST nodes for FEEL

use serde::{Deserialize, Serialize};

/// A literal value in FEEL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// Null literal
    Null,
    /// Boolean literal (true/false)
    Boolean(bool),
    /// Number literal (IEEE-754 double)
    Number(f64),
    /// String literal, escapes already resolved
    String(String),
    /// Temporal literal payload of `@"..."`, validated by the parser
    Temporal(String),
}

impl Literal {
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    pub fn temporal(s: impl Into<String>) -> Self {
        Self::Temporal(s.into())
    }
}

/// Type names accepted after `instance of`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeName {
    Number,
    String,
    Boolean,
    Date,
    Time,
    DateTime,
    DayTimeDuration,
    YearMonthDuration,
    List,
    Context,
    Range,
    Function,
    Any,
    Null,
}

impl TypeName {
    /// All type names, longest spelling first so multi-word names win
    pub const ALL: [TypeName; 14] = [
        TypeName::YearMonthDuration,
        TypeName::DayTimeDuration,
        TypeName::DateTime,
        TypeName::Function,
        TypeName::Boolean,
        TypeName::Context,
        TypeName::Number,
        TypeName::String,
        TypeName::Range,
        TypeName::Date,
        TypeName::Time,
        TypeName::List,
        TypeName::Null,
        TypeName::Any,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "date and time",
            Self::DayTimeDuration => "days and time duration",
            Self::YearMonthDuration => "years and months duration",
            Self::List => "list",
            Self::Context => "context",
            Self::Range => "range",
            Self::Function => "function",
            Self::Any => "Any",
            Self::Null => "null",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == name)
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name_lookup() {
        assert_eq!(TypeName::from_name("date and time"), Some(TypeName::DateTime));
        assert_eq!(TypeName::from_name("Any"), Some(TypeName::Any));
        assert_eq!(TypeName::from_name("any"), None);
    }

    #[test]
    fn test_type_names_longest_first() {
        let words: Vec<usize> = TypeName::ALL
            .iter()
            .map(|t| t.as_str().split(' ').count())
            .collect();
        assert!(words.windows(2).all(|w| w[0] >= w[1]));
    }
}
