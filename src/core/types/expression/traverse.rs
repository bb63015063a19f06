//! 表达式树遍历
//!
//! 提供表达式树的遍历和访问方法。

use crate::core::types::expression::Expression;

impl Expression {
    /// 获取表达式的所有直接子表达式
    pub fn children(&self) -> Vec<&Expression> {
        match self {
            Expression::Constant(_) | Expression::Parameter(_) => vec![],
            Expression::Member { object, .. } => vec![object.as_ref()],
            Expression::Convert { operand, .. } => vec![operand.as_ref()],
            Expression::Unary { operand, .. } => vec![operand.as_ref()],
            Expression::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Expression::Conditional {
                test,
                if_true,
                if_false,
            } => vec![test.as_ref(), if_true.as_ref(), if_false.as_ref()],
            Expression::Call { args, .. } => args.iter().collect(),
            Expression::Lambda { body, .. } => vec![body.as_ref()],
        }
    }

    /// 遍历表达式树（前序遍历）
    pub fn traverse_preorder<F>(&self, callback: &mut F)
    where
        F: FnMut(&Expression),
    {
        callback(self);
        for child in self.children() {
            child.traverse_preorder(callback);
        }
    }

    /// 统计节点数量
    pub fn count_nodes(&self) -> usize {
        let mut count = 0;
        self.traverse_preorder(&mut |_| count += 1);
        count
    }

    /// 统计条件表达式数量
    pub fn count_conditionals(&self) -> usize {
        let mut count = 0;
        self.traverse_preorder(&mut |e| {
            if e.is_conditional() {
                count += 1;
            }
        });
        count
    }

    /// 表达式树深度，叶子节点深度为 1
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Expression::depth)
            .max()
            .unwrap_or(0)
    }
}
