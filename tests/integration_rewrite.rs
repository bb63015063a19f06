//! 表达式重写集成测试
//!
//! 测试范围:
//! - rewrite::ComponentNullCheckRule - 组件空值检查消除
//! - rewrite::QueryRewriter - 查询重写器
//! - 从 JSON 加载的表达式树

mod common;

use common::*;
use odata_rewrite::config::{Config, RewriteConfig};
use odata_rewrite::core::{BinaryOperator, DataType, Expression};
use odata_rewrite::query::rewrite::{
    create_default_rewriter, rewrite_query, ComponentNullCheckRule, ExpressionRewriteRule,
    GuardMatching, QueryRewriter,
};
use std::sync::Arc;
use std::thread;

// ==================== 空值守卫消除 ====================

#[test]
fn test_component_filter_query_rewritten() {
    let rule = ComponentNullCheckRule::new();
    let (result, stats) = rule.rewrite_with_stats(&component_filter_query());

    assert_eq!(result, component_filter_query_without_guard());
    assert_eq!(stats.elided, 1);
}

#[test]
fn test_guarded_comparison_in_lambda() {
    let input = Expression::lambda(
        vec!["$it"],
        null_guard(Expression::eq(
            nullable_component_property("Two"),
            Expression::constant(5),
        )),
    );
    let expected = Expression::lambda(
        vec!["$it"],
        Expression::eq(nullable_component_property("Two"), Expression::constant(5)),
    );

    let result = rewrite_query(&input);
    assert_eq!(result, expected);
    assert_eq!(
        result.to_string(),
        "($it) => (Convert($it.Component.Two, int?) == 5)"
    );
}

#[test]
fn test_tree_without_conditionals_is_unchanged() {
    let rule = ComponentNullCheckRule::new();
    for input in [plain_predicate(), where_call(plain_predicate()), typed_parameter()] {
        assert_eq!(rule.rewrite(&input), input);
    }
}

#[test]
fn test_unrelated_conditional_is_preserved() {
    // Name == "x" ? 1 : 2 不是空值守卫
    let unrelated = Expression::conditional(
        Expression::eq(
            Expression::member(Expression::parameter("$it"), "Name"),
            Expression::constant("x"),
        ),
        Expression::constant(1),
        null_guard(nullable_component_property("One")),
    );
    let input = where_call(Expression::eq(unrelated, Expression::constant(1)));

    let expected_conditional = Expression::conditional(
        Expression::eq(
            Expression::member(Expression::parameter("$it"), "Name"),
            Expression::constant("x"),
        ),
        Expression::constant(1),
        nullable_component_property("One"),
    );
    let expected = where_call(Expression::eq(expected_conditional, Expression::constant(1)));

    let result = rewrite_query(&input);
    assert_eq!(result, expected);
    assert_eq!(result.count_conditionals(), 1);
}

#[test]
fn test_several_guards_in_one_predicate() {
    let predicate = Expression::binary(
        Expression::eq(null_guard(nullable_component_property("One")), Expression::constant(1)),
        BinaryOperator::Or,
        Expression::eq(null_guard(nullable_component_property("Four")), Expression::constant(4)),
    );
    let expected = Expression::binary(
        Expression::eq(nullable_component_property("One"), Expression::constant(1)),
        BinaryOperator::Or,
        Expression::eq(nullable_component_property("Four"), Expression::constant(4)),
    );

    let (result, stats) = ComponentNullCheckRule::new().rewrite_with_stats(&where_call(predicate));
    assert_eq!(result, where_call(expected));
    assert_eq!(stats.elided, 2);
}

#[test]
fn test_nested_guards_fully_flattened() {
    let nested = null_guard(null_guard(null_guard(nullable_component_property("Three"))));
    let input = where_call(Expression::eq(nested, typed_parameter()));
    let expected = where_call(Expression::eq(
        nullable_component_property("Three"),
        typed_parameter(),
    ));

    let result = rewrite_query(&input);
    assert_eq!(result, expected);
    assert_eq!(result.count_conditionals(), 0);
}

#[test]
fn test_root_guard_kept_while_inner_guards_elided() {
    let root = null_guard(Expression::eq(
        null_guard(nullable_component_property("Two")),
        Expression::constant(5),
    ));
    let expected = null_guard(Expression::eq(
        nullable_component_property("Two"),
        Expression::constant(5),
    ));

    let (result, stats) = ComponentNullCheckRule::new().rewrite_with_stats(&root);
    assert_eq!(result, expected);
    assert_eq!(stats.elided, 1);
}

#[test]
fn test_strict_matching_keeps_not_equal_guard() {
    let guard = Expression::conditional(
        Expression::binary(component(), BinaryOperator::NotEqual, Expression::null()),
        Expression::null(),
        nullable_component_property("Two"),
    );
    let input = where_call(Expression::eq(guard, Expression::constant(5)));

    let strict = ComponentNullCheckRule::with_matching(GuardMatching::Strict);
    assert_eq!(strict.rewrite(&input), input);

    let loose = ComponentNullCheckRule::with_matching(GuardMatching::Loose);
    assert_eq!(loose.rewrite(&input).count_conditionals(), 0);
}

// ==================== QueryRewriter ====================

#[test]
fn test_rewriter_from_config() {
    let config = Config::from_toml("[rewrite]\ncomponent_null_check = false\n")
        .expect("Failed to parse config");
    let rewriter = create_default_rewriter(&config.rewrite);
    assert!(rewriter.is_empty());
    assert_eq!(rewriter.rewrite(&component_filter_query()), component_filter_query());
}

#[test]
fn test_rewriter_manual_registration() {
    let mut rewriter = QueryRewriter::new();
    rewriter.add_rule(ComponentNullCheckRule::new());
    rewriter.add_rule(ComponentNullCheckRule::with_matching(GuardMatching::Strict));
    assert_eq!(rewriter.len(), 2);

    assert_eq!(
        rewriter.rewrite(&component_filter_query()),
        component_filter_query_without_guard()
    );
}

#[test]
fn test_concurrent_rewrites_share_one_rewriter() {
    let rewriter = Arc::new(create_default_rewriter(&RewriteConfig::default()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let rewriter = Arc::clone(&rewriter);
            thread::spawn(move || rewriter.rewrite(&component_filter_query()))
        })
        .collect();

    for handle in handles {
        let result = handle.join().expect("rewrite thread panicked");
        assert_eq!(result, component_filter_query_without_guard());
    }
}

// ==================== JSON 表达式树 ====================

#[test]
fn test_rewrite_tree_loaded_from_json() {
    let json = r#"{
        "Lambda": {
            "parameters": ["$it"],
            "body": {
                "Conditional": {
                    "test": {
                        "Binary": {
                            "left": {"Member": {"object": {"Parameter": "$it"}, "member": "Component"}},
                            "op": "Equal",
                            "right": {"Constant": "Null"}
                        }
                    },
                    "if_true": {"Constant": "Null"},
                    "if_false": {
                        "Binary": {
                            "left": {
                                "Convert": {
                                    "operand": {
                                        "Member": {
                                            "object": {"Member": {"object": {"Parameter": "$it"}, "member": "Component"}},
                                            "member": "Two"
                                        }
                                    },
                                    "target_type": {"Nullable": "Int32"}
                                }
                            },
                            "op": "Equal",
                            "right": {"Constant": {"Int": 5}}
                        }
                    }
                }
            }
        }
    }"#;

    let input = Expression::from_json(json).expect("Failed to parse expression");
    let result = rewrite_query(&input);

    let expected = Expression::lambda(
        vec!["$it"],
        Expression::eq(
            Expression::convert(
                Expression::member(component(), "Two"),
                DataType::nullable(DataType::Int32),
            ),
            Expression::constant(5),
        ),
    );
    assert_eq!(result, expected);

    let json_out = result.to_json().expect("Failed to serialize expression");
    assert_eq!(Expression::from_json(&json_out).expect("reparse failed"), expected);
}
