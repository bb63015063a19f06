//! 组件空值检查消除规则
//!
//! 查询前端在每次访问可空组件属性时都会生成空值守卫：
//!
//! ```text
//! ($it.Component == null) ? null : (Convert($it.Component.Two, int?) == 5)
//! ```
//!
//! ORM 翻译器无法为映射了四个及以上属性的组件生成这种空值检查的 HQL，
//! 而底层存储本身就有空值语义，所以这里直接丢弃守卫，只保留 else 分支：
//!
//! ```text
//! (Convert($it.Component.Two, int?) == 5)
//! ```
//!
//! 替换的前提是前端保证两个分支的结果类型一致，本规则不做校验。

use crate::core::types::expression::ExpressionTransformer;
use crate::core::{BinaryOperator, Expression};
use crate::query::rewrite::rule::ExpressionRewriteRule;
use serde::{Deserialize, Serialize};

/// 空值守卫的匹配方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardMatching {
    /// 条件是右操作数为空值常量的二元运算即可，不检查操作符和 then 分支
    #[default]
    Loose,
    /// 额外要求操作符为 `==`，且 then 分支为空值常量（允许外层类型转换）
    Strict,
}

/// 单次重写的统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// 被消除的空值守卫数量
    pub elided: usize,
}

/// 组件空值检查消除规则
#[derive(Debug, Clone, Default)]
pub struct ComponentNullCheckRule {
    matching: GuardMatching,
}

impl ComponentNullCheckRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matching(matching: GuardMatching) -> Self {
        Self { matching }
    }

    /// 重写表达式树并返回统计信息
    ///
    /// 根节点本身不参与匹配，从 `transform_children` 进入遍历，它的子节点照常匹配。
    pub fn rewrite_with_stats(&self, root: &Expression) -> (Expression, RewriteStats) {
        log::trace!("{}: 顶层节点 {}", self.name(), root.kind_name());

        let mut eliminator = NullGuardEliminator {
            rule: self.name(),
            matching: self.matching,
            stats: RewriteStats::default(),
        };
        let rewritten = eliminator.transform_children(root);

        log::trace!("{}: 消除了 {} 个空值守卫", self.name(), eliminator.stats.elided);
        (rewritten, eliminator.stats)
    }
}

/// 单次遍历的转换器，每次调用 `rewrite_with_stats` 新建一个
struct NullGuardEliminator {
    rule: &'static str,
    matching: GuardMatching,
    stats: RewriteStats,
}

impl NullGuardEliminator {
    /// 检查条件是否为 `X == null` 形式的空值守卫
    fn is_null_guard(&self, test: &Expression, if_true: &Expression) -> bool {
        let Some((_, op, right)) = test.as_binary() else {
            return false;
        };
        if !right.is_null_constant() {
            return false;
        }

        match self.matching {
            GuardMatching::Loose => true,
            GuardMatching::Strict => op == BinaryOperator::Equal && is_null_branch(if_true),
        }
    }
}

impl ExpressionTransformer for NullGuardEliminator {
    fn transform(&mut self, expression: &Expression) -> Expression {
        if let Expression::Conditional {
            test,
            if_true,
            if_false,
        } = expression
        {
            if self.is_null_guard(test, if_true) {
                self.stats.elided += 1;
                log::debug!("{}: 消除空值守卫 {}", self.rule, test);
                return self.transform(if_false);
            }
        }

        self.transform_children(expression)
    }
}

/// then 分支是否求值为空值，前端可能在空值常量外包一层可空类型转换
fn is_null_branch(expression: &Expression) -> bool {
    match expression {
        Expression::Convert { operand, .. } => is_null_branch(operand),
        other => other.is_null_constant(),
    }
}

impl ExpressionRewriteRule for ComponentNullCheckRule {
    fn name(&self) -> &'static str {
        "ComponentNullCheckRule"
    }

    fn rewrite(&self, root: &Expression) -> Expression {
        self.rewrite_with_stats(root).0
    }
}
