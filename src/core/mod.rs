//! 核心类型模块
//!
//! 包含表达式树、常量值、数据类型和错误类型

pub mod error;
pub mod types;
pub mod value;

pub use error::{RewriteError, RewriteResult};
pub use types::expression::Expression;
pub use types::operators::{BinaryOperator, UnaryOperator};
pub use types::DataType;
pub use value::Value;
