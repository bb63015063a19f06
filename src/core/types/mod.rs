//! 核心类型定义
//!
//! 数据类型、操作符以及统一的表达式树类型

pub mod expression;
pub mod operators;

use serde::{Deserialize, Serialize};
use std::fmt;

// 重新导出常用类型
pub use expression::Expression;
pub use operators::{BinaryOperator, UnaryOperator};

/// 表达式结果的数据类型
///
/// `Object` 表示映射实体或组件类型；`Nullable` 对应前端生成的可空提升（`int?`）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Bool,
    Int32,
    Int64,
    Double,
    String,
    Object(String),
    Nullable(Box<DataType>),
    Function(Vec<DataType>, Box<DataType>),
}

impl DataType {
    /// 包装为可空类型，已经可空时保持不变
    pub fn nullable(inner: DataType) -> Self {
        match inner {
            DataType::Nullable(_) => inner,
            other => DataType::Nullable(Box::new(other)),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Bool => write!(f, "bool"),
            DataType::Int32 => write!(f, "int"),
            DataType::Int64 => write!(f, "long"),
            DataType::Double => write!(f, "double"),
            DataType::String => write!(f, "string"),
            DataType::Object(name) => write!(f, "{}", name),
            DataType::Nullable(inner) => write!(f, "{}?", inner),
            DataType::Function(params, ret) => {
                let params_str = params
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Func<{}, {}>", params_str, ret)
            }
        }
    }
}
