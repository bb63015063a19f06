//! 统一表达式类型定义
//!
//! 本模块定义查询前端生成、ORM 翻译器消费的表达式树 `Expression`。
//!
//! ## 变体说明
//!
//! | 变体 | 用途 |
//! |------|------|
//! | `Constant` | 常量值 |
//! | `Parameter` | lambda 参数引用 |
//! | `Member` | 属性访问 |
//! | `Convert` | 类型转换 |
//! | `Unary` | 一元运算 |
//! | `Binary` | 二元运算 |
//! | `Conditional` | 条件表达式（`.If {} .Else {}`） |
//! | `Call` | 方法调用 |
//! | `Lambda` | lambda 表达式 |
//!
//! ## 使用示例
//!
//! ```rust
//! use odata_rewrite::core::types::expression::Expression;
//! use odata_rewrite::core::Value;
//!
//! let it = Expression::parameter("$it");
//! let guard = Expression::eq(Expression::member(it.clone(), "Component"), Expression::null());
//! let value = Expression::eq(
//!     Expression::member(Expression::member(it, "Component"), "Two"),
//!     Expression::constant(Value::Int(5)),
//! );
//! let expression = Expression::conditional(guard, Expression::null(), value);
//! assert!(expression.is_conditional());
//! ```

mod constructors;
mod def;
mod display;
mod inspection;
mod traverse;
pub mod transformer;

pub use def::Expression;
pub use transformer::{transform_children, ExpressionTransformer};
