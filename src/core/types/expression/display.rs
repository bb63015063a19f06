//! 表达式字符串表示
//!
//! 生成类似 C# 调试视图的表达式字符串。

use crate::core::types::expression::Expression;
use std::fmt;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Constant(value) => write!(f, "{}", value),
            Expression::Parameter(name) => write!(f, "{}", name),
            Expression::Member { object, member } => write!(f, "{}.{}", object, member),
            Expression::Convert {
                operand,
                target_type,
            } => write!(f, "Convert({}, {})", operand, target_type),
            Expression::Unary { op, operand } => write!(f, "{}{}", op.name(), operand),
            Expression::Binary { left, op, right } => {
                write!(f, "({} {} {})", left, op.name(), right)
            }
            Expression::Conditional {
                test,
                if_true,
                if_false,
            } => write!(f, "({} ? {} : {})", test, if_true, if_false),
            Expression::Call { method, args } => {
                let args_str = args
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{}({})", method, args_str)
            }
            Expression::Lambda { parameters, body } => {
                write!(f, "({}) => {}", parameters.join(", "), body)
            }
        }
    }
}
