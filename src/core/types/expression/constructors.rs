//! 表达式构造函数
//!
//! 提供创建各类表达式的工厂方法。

use crate::core::types::expression::Expression;
use crate::core::types::operators::{BinaryOperator, UnaryOperator};
use crate::core::types::DataType;
use crate::core::{RewriteResult, Value};

impl Expression {
    /// 创建常量表达式
    pub fn constant(value: impl Into<Value>) -> Self {
        Expression::Constant(value.into())
    }

    /// 创建空值常量
    pub fn null() -> Self {
        Expression::Constant(Value::Null)
    }

    /// 创建参数引用表达式
    pub fn parameter(name: impl Into<String>) -> Self {
        Expression::Parameter(name.into())
    }

    /// 创建属性访问表达式
    pub fn member(object: Expression, member: impl Into<String>) -> Self {
        Expression::Member {
            object: Box::new(object),
            member: member.into(),
        }
    }

    /// 创建类型转换表达式
    pub fn convert(operand: Expression, target_type: DataType) -> Self {
        Expression::Convert {
            operand: Box::new(operand),
            target_type,
        }
    }

    /// 创建一元运算表达式
    pub fn unary(op: UnaryOperator, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// 创建 quote 表达式
    pub fn quote(operand: Expression) -> Self {
        Expression::unary(UnaryOperator::Quote, operand)
    }

    /// 创建二元运算表达式
    pub fn binary(left: Expression, op: BinaryOperator, right: Expression) -> Self {
        Expression::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// 创建相等比较表达式
    pub fn eq(left: Expression, right: Expression) -> Self {
        Expression::binary(left, BinaryOperator::Equal, right)
    }

    /// 创建条件表达式
    pub fn conditional(test: Expression, if_true: Expression, if_false: Expression) -> Self {
        Expression::Conditional {
            test: Box::new(test),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        }
    }

    /// 创建方法调用表达式
    pub fn call(method: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::Call {
            method: method.into(),
            args,
        }
    }

    /// 创建 lambda 表达式
    pub fn lambda(parameters: Vec<impl Into<String>>, body: Expression) -> Self {
        Expression::Lambda {
            parameters: parameters.into_iter().map(Into::into).collect(),
            body: Box::new(body),
        }
    }

    /// 从 JSON 文本解析表达式树
    pub fn from_json(json: &str) -> RewriteResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 序列化为 JSON 文本
    pub fn to_json(&self) -> RewriteResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
