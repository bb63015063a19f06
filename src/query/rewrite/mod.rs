//! 表达式重写模块
//!
//! 包含在表达式树交给 ORM 翻译器之前应用的启发式重写规则。
//!
//! # 模块结构
//!
//! - `rule`: 重写规则 trait 定义
//! - `rule_enum`: 静态分发规则枚举
//! - `component_null_check`: 组件空值检查消除规则
//! - `query_rewriter`: 查询重写器实现
//!
//! # 使用示例
//!
//! ```rust
//! use odata_rewrite::config::RewriteConfig;
//! use odata_rewrite::query::rewrite::create_default_rewriter;
//! use odata_rewrite::Expression;
//!
//! let rewriter = create_default_rewriter(&RewriteConfig::default());
//! let predicate = Expression::lambda(vec!["$it"], Expression::constant(true));
//! assert_eq!(rewriter.rewrite(&predicate), predicate);
//! ```

pub mod component_null_check;
pub mod query_rewriter;
pub mod rule;
pub mod rule_enum;

pub use component_null_check::{ComponentNullCheckRule, GuardMatching, RewriteStats};
pub use query_rewriter::{create_default_rewriter, rewrite_query, QueryRewriter};
pub use rule::ExpressionRewriteRule;
pub use rule_enum::RewriteRuleEnum;
