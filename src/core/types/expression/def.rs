//! 表达式类型定义

use crate::core::types::operators::{BinaryOperator, UnaryOperator};
use crate::core::types::DataType;
use crate::core::Value;
use serde::{Deserialize, Serialize};

/// 统一表达式类型
///
/// 调用方拥有整棵树；重写规则只读取输入并构建新树。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// 常量值
    Constant(Value),

    /// lambda 参数引用，如 `$it`
    Parameter(String),

    /// 属性访问
    Member {
        object: Box<Expression>,
        member: String,
    },

    /// 类型转换，如 `(int?)x`
    Convert {
        operand: Box<Expression>,
        target_type: DataType,
    },

    /// 一元运算
    Unary {
        op: UnaryOperator,
        operand: Box<Expression>,
    },

    /// 二元运算
    Binary {
        left: Box<Expression>,
        op: BinaryOperator,
        right: Box<Expression>,
    },

    /// 条件表达式
    ///
    /// `if (test) then if_true else if_false`
    Conditional {
        test: Box<Expression>,
        if_true: Box<Expression>,
        if_false: Box<Expression>,
    },

    /// 方法调用，如 `System.Linq.Queryable.Where(source, predicate)`
    Call {
        method: String,
        args: Vec<Expression>,
    },

    /// lambda 表达式
    Lambda {
        parameters: Vec<String>,
        body: Box<Expression>,
    },
}
