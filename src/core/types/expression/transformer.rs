//! 表达式转换器
//!
//! `transform_children` 是恒等重写的一步：保留节点类型和非子节点字段，
//! 只替换直接子表达式。`ExpressionTransformer` 在它之上提供可覆盖的递归入口，
//! 重写规则在不匹配的节点上回到 `transform_children` 继续向下。

use crate::core::types::expression::Expression;

/// 用 `f` 的结果替换每个直接子表达式，重建当前节点
pub fn transform_children<F>(expression: &Expression, mut f: F) -> Expression
where
    F: FnMut(&Expression) -> Expression,
{
    match expression {
        Expression::Constant(_) | Expression::Parameter(_) => expression.clone(),
        Expression::Member { object, member } => Expression::Member {
            object: Box::new(f(object)),
            member: member.clone(),
        },
        Expression::Convert {
            operand,
            target_type,
        } => Expression::Convert {
            operand: Box::new(f(operand)),
            target_type: target_type.clone(),
        },
        Expression::Unary { op, operand } => Expression::Unary {
            op: *op,
            operand: Box::new(f(operand)),
        },
        Expression::Binary { left, op, right } => {
            let new_left = f(left);
            let new_right = f(right);
            Expression::Binary {
                left: Box::new(new_left),
                op: *op,
                right: Box::new(new_right),
            }
        }
        Expression::Conditional {
            test,
            if_true,
            if_false,
        } => {
            let new_test = f(test);
            let new_if_true = f(if_true);
            let new_if_false = f(if_false);
            Expression::Conditional {
                test: Box::new(new_test),
                if_true: Box::new(new_if_true),
                if_false: Box::new(new_if_false),
            }
        }
        Expression::Call { method, args } => Expression::Call {
            method: method.clone(),
            args: args.iter().map(&mut f).collect(),
        },
        Expression::Lambda { parameters, body } => Expression::Lambda {
            parameters: parameters.clone(),
            body: Box::new(f(body)),
        },
    }
}

/// 表达式转换器 trait
///
/// 默认实现对整棵树做恒等重写，实现者覆盖 `transform` 拦截感兴趣的节点。
/// 直接调用 `transform_children` 可以跳过对当前节点本身的拦截。
pub trait ExpressionTransformer {
    /// 转换表达式
    fn transform(&mut self, expression: &Expression) -> Expression {
        self.transform_children(expression)
    }

    /// 转换子表达式
    fn transform_children(&mut self, expression: &Expression) -> Expression {
        transform_children(expression, |child| self.transform(child))
    }
}
