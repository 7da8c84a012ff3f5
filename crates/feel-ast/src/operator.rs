//! FEEL operators with binding strengths

use serde::{Deserialize, Serialize};

/// Binding strength of `between`, `in` and `instance of`
pub const COMPARISON_PRECEDENCE: u8 = 30;
/// Binding strength of the operand of unary minus
pub const UNARY_PRECEDENCE: u8 = 70;
/// Binding strength of `.name` and `[...]`
pub const POSTFIX_PRECEDENCE: u8 = 80;

/// Binary operators in FEEL with their precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Precedence 10 (lowest)
    /// Three-valued disjunction
    Or,

    // Precedence 20
    /// Three-valued conjunction
    And,

    // Precedence 30
    /// Deep structural equality
    Equal,
    /// Negated structural equality
    NotEqual,
    /// Less than
    Less,
    /// Less than or equal
    LessOrEqual,
    /// Greater than
    Greater,
    /// Greater than or equal
    GreaterOrEqual,

    // Precedence 40
    /// Addition, string concatenation, temporal shift
    Add,
    /// Subtraction, temporal difference
    Subtract,

    // Precedence 50
    /// Multiplication
    Multiply,
    /// Division (null on zero divisor)
    Divide,

    // Precedence 60 (highest for binary), right-associative
    /// Exponentiation
    Power,
}

impl BinaryOp {
    /// Binding strength (higher binds tighter)
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Or => 10,
            Self::And => 20,
            Self::Equal
            | Self::NotEqual
            | Self::Less
            | Self::LessOrEqual
            | Self::Greater
            | Self::GreaterOrEqual => COMPARISON_PRECEDENCE,
            Self::Add | Self::Subtract => 40,
            Self::Multiply | Self::Divide => 50,
            Self::Power => 60,
        }
    }

    pub const fn is_right_associative(&self) -> bool {
        matches!(self, Self::Power)
    }

    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Equal
                | Self::NotEqual
                | Self::Less
                | Self::LessOrEqual
                | Self::Greater
                | Self::GreaterOrEqual
        )
    }

    pub const fn is_logical(&self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Or => "or",
            Self::And => "and",
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "**",
        }
    }

    /// Operator for a symbol or keyword
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "or" => Self::Or,
            "and" => Self::And,
            "=" => Self::Equal,
            "!=" => Self::NotEqual,
            "<" => Self::Less,
            "<=" => Self::LessOrEqual,
            ">" => Self::Greater,
            ">=" => Self::GreaterOrEqual,
            "+" => Self::Add,
            "-" => Self::Subtract,
            "*" => Self::Multiply,
            "/" => Self::Divide,
            "**" => Self::Power,
            _ => return None,
        })
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `some` or `every`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantifier {
    Some,
    Every,
}
