//! Expressions: a value, or exactly one binary operation over two values
//!
//! There is no precedence climbing. `$a + 1 > $b` is a comparison between an arithmetic
//! expression and a value; `1 + 2 + 3` does not parse as an expression at all.

use super::super::traits::AstNode;
use super::literal::Literal;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArithmeticOperator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl ArithmeticOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(ArithmeticOperator::Add),
            "-" => Some(ArithmeticOperator::Subtract),
            "*" => Some(ArithmeticOperator::Multiply),
            "/" => Some(ArithmeticOperator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ArithmeticOperator::Add => "+",
            ArithmeticOperator::Subtract => "-",
            ArithmeticOperator::Multiply => "*",
            ArithmeticOperator::Divide => "/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComparisonOperator {
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "is")]
    Is,
    #[serde(rename = "is not")]
    IsNot,
    #[serde(rename = "contains")]
    Contains,
    #[serde(rename = "does not contain")]
    DoesNotContain,
}

impl ComparisonOperator {
    /// Accepts the operator with any run of whitespace between its words.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let normalized = symbol.split_whitespace().collect::<Vec<_>>().join(" ");
        match normalized.as_str() {
            ">=" => Some(ComparisonOperator::GreaterOrEqual),
            "<=" => Some(ComparisonOperator::LessOrEqual),
            ">" => Some(ComparisonOperator::Greater),
            "<" => Some(ComparisonOperator::Less),
            "is" => Some(ComparisonOperator::Is),
            "is not" => Some(ComparisonOperator::IsNot),
            "contains" => Some(ComparisonOperator::Contains),
            "does not contain" => Some(ComparisonOperator::DoesNotContain),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::GreaterOrEqual => ">=",
            ComparisonOperator::LessOrEqual => "<=",
            ComparisonOperator::Greater => ">",
            ComparisonOperator::Less => "<",
            ComparisonOperator::Is => "is",
            ComparisonOperator::IsNot => "is not",
            ComparisonOperator::Contains => "contains",
            ComparisonOperator::DoesNotContain => "does not contain",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Arithmetic {
    pub operator: ArithmeticOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Comparison {
    pub operator: ComparisonOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expression {
    Value(Literal),
    Arithmetic(Arithmetic),
    Comparison(Comparison),
}

impl Expression {
    pub fn arithmetic(operator: ArithmeticOperator, left: Expression, right: Expression) -> Self {
        Expression::Arithmetic(Arithmetic {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn comparison(operator: ComparisonOperator, left: Expression, right: Expression) -> Self {
        Expression::Comparison(Comparison {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Expression::Value(literal) => Some(literal),
            _ => None,
        }
    }

    /// Human-readable category used in macro shape errors.
    pub fn category(&self) -> &'static str {
        match self {
            Expression::Value(literal) => literal.category(),
            Expression::Arithmetic(_) => "arithmetic expression",
            Expression::Comparison(_) => "comparison",
        }
    }
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Expression::Value(literal)
    }
}

impl AstNode for Expression {
    fn node_type(&self) -> &'static str {
        match self {
            Expression::Value(literal) => literal.node_type(),
            Expression::Arithmetic(_) => "Arithmetic",
            Expression::Comparison(_) => "Comparison",
        }
    }

    fn display_label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Value(literal) => write!(f, "{}", literal),
            Expression::Arithmetic(op) => {
                write!(f, "{} {} {}", op.left, op.operator.symbol(), op.right)
            }
            Expression::Comparison(op) => {
                write!(f, "{} {} {}", op.left, op.operator.symbol(), op.right)
            }
        }
    }
}
