//! 重写规则枚举 - 静态分发实现
//!
//! 所有规则都作为枚举变体，通过 match 进行分发，避免 trait 对象。

use crate::core::Expression;
use crate::query::rewrite::component_null_check::ComponentNullCheckRule;
use crate::query::rewrite::rule::ExpressionRewriteRule;

/// 重写规则枚举
#[derive(Debug, Clone)]
pub enum RewriteRuleEnum {
    ComponentNullCheck(ComponentNullCheckRule),
}

impl RewriteRuleEnum {
    pub fn name(&self) -> &'static str {
        match self {
            RewriteRuleEnum::ComponentNullCheck(rule) => rule.name(),
        }
    }

    pub fn rewrite(&self, root: &Expression) -> Expression {
        match self {
            RewriteRuleEnum::ComponentNullCheck(rule) => rule.rewrite(root),
        }
    }
}

impl From<ComponentNullCheckRule> for RewriteRuleEnum {
    fn from(rule: ComponentNullCheckRule) -> Self {
        RewriteRuleEnum::ComponentNullCheck(rule)
    }
}
