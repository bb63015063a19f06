//! 表达式检查方法

use crate::core::types::expression::Expression;
use crate::core::types::operators::BinaryOperator;
use crate::core::Value;

impl Expression {
    /// 是否为条件表达式
    pub fn is_conditional(&self) -> bool {
        matches!(self, Expression::Conditional { .. })
    }

    /// 如果是二元运算，返回 (左操作数, 操作符, 右操作数)
    pub fn as_binary(&self) -> Option<(&Expression, BinaryOperator, &Expression)> {
        match self {
            Expression::Binary { left, op, right } => Some((left.as_ref(), *op, right.as_ref())),
            _ => None,
        }
    }

    /// 如果是常量，返回常量值
    pub fn as_constant(&self) -> Option<&Value> {
        match self {
            Expression::Constant(value) => Some(value),
            _ => None,
        }
    }

    /// 是否为空值常量
    pub fn is_null_constant(&self) -> bool {
        self.as_constant().is_some_and(Value::is_null)
    }

    /// 节点类型名称
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Constant(_) => "Constant",
            Expression::Parameter(_) => "Parameter",
            Expression::Member { .. } => "Member",
            Expression::Convert { .. } => "Convert",
            Expression::Unary { .. } => "Unary",
            Expression::Binary { .. } => "Binary",
            Expression::Conditional { .. } => "Conditional",
            Expression::Call { .. } => "Call",
            Expression::Lambda { .. } => "Lambda",
        }
    }
}
