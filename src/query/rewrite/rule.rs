//! 表达式重写规则 trait 定义

use crate::core::Expression;

/// 表达式重写规则 trait
///
/// 规则是从输入树到输出树的纯函数，不修改输入，也不在调用之间保留状态，
/// 因此同一个规则实例可以被多个线程同时使用。
pub trait ExpressionRewriteRule: Send + Sync {
    /// 规则名称
    fn name(&self) -> &'static str;

    /// 对整棵表达式树应用规则
    ///
    /// 不匹配的树原样返回（结构相等的副本）。
    fn rewrite(&self, root: &Expression) -> Expression;
}
