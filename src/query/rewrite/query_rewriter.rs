//! 查询重写器实现
//!
//! 管理启用的重写规则，按注册顺序对谓词表达式树各应用一次

use crate::config::{Config, RewriteConfig};
use crate::core::Expression;
use crate::query::rewrite::component_null_check::ComponentNullCheckRule;
use crate::query::rewrite::rule_enum::RewriteRuleEnum;

/// 查询重写器
#[derive(Debug, Clone, Default)]
pub struct QueryRewriter {
    rules: Vec<RewriteRuleEnum>,
}

impl QueryRewriter {
    /// 创建空的查询重写器
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// 添加重写规则
    pub fn add_rule(&mut self, rule: impl Into<RewriteRuleEnum>) {
        self.rules.push(rule.into());
    }

    /// 已注册的规则名称
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(RewriteRuleEnum::name).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 依次应用所有规则
    ///
    /// 每个规则接收上一个规则的输出。没有规则时返回输入的副本。
    pub fn rewrite(&self, root: &Expression) -> Expression {
        let mut current = root.clone();
        for rule in &self.rules {
            current = rule.rewrite(&current);
            log::trace!("应用规则 {} 后: {}", rule.name(), current);
        }
        current
    }
}

/// 根据配置创建默认重写器
pub fn create_default_rewriter(config: &RewriteConfig) -> QueryRewriter {
    let mut rewriter = QueryRewriter::new();
    if config.component_null_check {
        rewriter.add_rule(ComponentNullCheckRule::with_matching(config.guard_matching));
    }
    rewriter
}

/// 使用默认配置重写表达式树
pub fn rewrite_query(root: &Expression) -> Expression {
    create_default_rewriter(&Config::default().rewrite).rewrite(root)
}
