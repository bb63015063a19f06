//! 集成测试共享工具模块
//!
//! 构造查询前端生成的示例表达式树

#![allow(dead_code)]

use odata_rewrite::core::{BinaryOperator, DataType, Expression};

pub const WHERE: &str = "System.Linq.Queryable.Where";

/// `$it.Component`
pub fn component() -> Expression {
    Expression::member(Expression::parameter("$it"), "Component")
}

/// `(int?)$it.Component.<name>`
pub fn nullable_component_property(name: &str) -> Expression {
    Expression::convert(
        Expression::member(component(), name),
        DataType::nullable(DataType::Int32),
    )
}

/// `($it.Component == null) ? null : value`
pub fn null_guard(value: Expression) -> Expression {
    Expression::conditional(
        Expression::eq(component(), Expression::null()),
        Expression::null(),
        value,
    )
}

/// 查询参数容器中的类型化常量
pub fn typed_parameter() -> Expression {
    Expression::convert(
        Expression::member(
            Expression::parameter("TypedLinqParameterContainer<int>"),
            "TypedProperty",
        ),
        DataType::nullable(DataType::Int32),
    )
}

/// `Queryable.Where(source, '($it) => predicate)`
pub fn where_call(predicate: Expression) -> Expression {
    Expression::call(
        WHERE,
        vec![
            Expression::parameter("NhQueryable<Parent>"),
            Expression::quote(Expression::lambda(vec!["$it"], predicate)),
        ],
    )
}

/// `$filter=Component/Two eq 5` 经前端翻译后的完整调用
pub fn component_filter_query() -> Expression {
    where_call(Expression::eq(
        Expression::eq(null_guard(nullable_component_property("Two")), typed_parameter()),
        Expression::constant(true),
    ))
}

/// 去掉空值守卫后期望的调用
pub fn component_filter_query_without_guard() -> Expression {
    where_call(Expression::eq(
        Expression::eq(nullable_component_property("Two"), typed_parameter()),
        Expression::constant(true),
    ))
}

/// 不含任何条件表达式的谓词
pub fn plain_predicate() -> Expression {
    Expression::binary(
        Expression::binary(
            Expression::member(Expression::parameter("$it"), "Name"),
            BinaryOperator::Equal,
            Expression::constant("Parent 1"),
        ),
        BinaryOperator::And,
        Expression::binary(
            Expression::member(Expression::parameter("$it"), "Id"),
            BinaryOperator::GreaterThan,
            Expression::constant(3),
        ),
    )
}
