use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use shardline_core::{RestoreError, RestoreFlag, Result};

use super::ColumnName;
use crate::restore::{restore_joined, write_string, Restorer};

/// Literal value embedded in the statement text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Restorer for Literal {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, _args: &mut Vec<usize>) -> Result<()> {
        if let Literal::Float(v) = self {
            if !v.is_finite() {
                return Err(RestoreError::Unsupported(format!("non-finite float literal {}", v)));
            }
        }
        if flag.contains(RestoreFlag::MASK_LITERALS) {
            sb.push('?');
            return Ok(());
        }
        match self {
            Literal::Null => sb.push_str("NULL"),
            Literal::Bool(true) => sb.push_str("TRUE"),
            Literal::Bool(false) => sb.push_str("FALSE"),
            Literal::Int(v) => sb.push_str(&v.to_string()),
            Literal::Float(v) => sb.push_str(&v.to_string()),
            Literal::String(s) => write_string(sb, flag, s),
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOperator {
    Eq,
    NotEq,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
}

impl Display for CompareOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CompareOperator::Eq => write!(f, "="),
            CompareOperator::NotEq => write!(f, "<>"),
            CompareOperator::Gt => write!(f, ">"),
            CompareOperator::Gte => write!(f, ">="),
            CompareOperator::Lt => write!(f, "<"),
            CompareOperator::Lte => write!(f, "<="),
            CompareOperator::Like => write!(f, "LIKE"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalOperator {
    And,
    Or,
}

impl Display for LogicalOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOperator::And => write!(f, "AND"),
            LogicalOperator::Or => write!(f, "OR"),
        }
    }
}

/// Expression tree used by key parts and filters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpressionNode {
    Column(ColumnName),
    Literal(Literal),
    /// Bound-parameter marker; the value is its ordinal among the client's
    /// arguments.
    Param(usize),
    Function {
        name: String,
        #[serde(default)]
        args: Vec<ExpressionNode>,
    },
    Compare {
        op: CompareOperator,
        left: Box<ExpressionNode>,
        right: Box<ExpressionNode>,
    },
    Logical {
        op: LogicalOperator,
        left: Box<ExpressionNode>,
        right: Box<ExpressionNode>,
    },
}

impl ExpressionNode {
    pub fn column(name: impl Into<String>) -> Self {
        ExpressionNode::Column(ColumnName::new(name))
    }

    pub fn string(s: impl Into<String>) -> Self {
        ExpressionNode::Literal(Literal::String(s.into()))
    }

    pub fn function(name: impl Into<String>, args: Vec<ExpressionNode>) -> Self {
        ExpressionNode::Function {
            name: name.into(),
            args,
        }
    }

    pub fn compare(op: CompareOperator, left: ExpressionNode, right: ExpressionNode) -> Self {
        ExpressionNode::Compare {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn and(self, other: ExpressionNode) -> Self {
        ExpressionNode::Logical {
            op: LogicalOperator::And,
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    pub fn or(self, other: ExpressionNode) -> Self {
        ExpressionNode::Logical {
            op: LogicalOperator::Or,
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    /// Binding strength of the node's operator. Leaves bind tightest.
    fn precedence(&self) -> u8 {
        match self {
            ExpressionNode::Logical { op: LogicalOperator::Or, .. } => 1,
            ExpressionNode::Logical { op: LogicalOperator::And, .. } => 2,
            ExpressionNode::Compare { .. } => 3,
            _ => u8::MAX,
        }
    }

    // Operators are left-associative: the right operand is wrapped on a tie.
    fn restore_binary(
        &self,
        op: &str,
        left: &ExpressionNode,
        right: &ExpressionNode,
        flag: RestoreFlag,
        sb: &mut String,
        args: &mut Vec<usize>,
    ) -> Result<()> {
        let prec = self.precedence();
        restore_operand(left, left.precedence() < prec, flag, sb, args)?;
        sb.push(' ');
        sb.push_str(op);
        sb.push(' ');
        restore_operand(right, right.precedence() <= prec, flag, sb, args)
    }
}

fn restore_operand(
    expr: &ExpressionNode,
    wrap: bool,
    flag: RestoreFlag,
    sb: &mut String,
    args: &mut Vec<usize>,
) -> Result<()> {
    if wrap {
        sb.push('(');
        expr.restore(flag, sb, args)?;
        sb.push(')');
        Ok(())
    } else {
        expr.restore(flag, sb, args)
    }
}

impl Restorer for ExpressionNode {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: &mut Vec<usize>) -> Result<()> {
        match self {
            ExpressionNode::Column(col) => col.restore(flag, sb, args),
            ExpressionNode::Literal(lit) => lit.restore(flag, sb, args),
            ExpressionNode::Param(idx) => {
                sb.push('?');
                args.push(*idx);
                Ok(())
            }
            ExpressionNode::Function { name, args: params } => {
                if name.is_empty() {
                    return Err(RestoreError::EmptyFunctionName);
                }
                sb.push_str(&name.to_uppercase());
                sb.push('(');
                restore_joined(params, ", ", flag, sb, args)?;
                sb.push(')');
                Ok(())
            }
            ExpressionNode::Compare { op, left, right } => {
                self.restore_binary(&op.to_string(), left, right, flag, sb, args)
            }
            ExpressionNode::Logical { op, left, right } => {
                self.restore_binary(&op.to_string(), left, right, flag, sb, args)
            }
        }
    }

    fn cnt_params(&self) -> usize {
        match self {
            ExpressionNode::Param(_) => 1,
            ExpressionNode::Column(_) | ExpressionNode::Literal(_) => 0,
            ExpressionNode::Function { args, .. } => args.iter().map(Restorer::cnt_params).sum(),
            ExpressionNode::Compare { left, right, .. }
            | ExpressionNode::Logical { left, right, .. } => {
                left.cnt_params() + right.cnt_params()
            }
        }
    }
}
