//! OData Rewrite - expression tree patches for OData query predicates
//!
//! This crate rewrites the predicate trees produced by an OData query
//! translation front end before they are handed to the ORM translator.
//! The only rule shipped today elides the null guard the front end emits
//! around component property access, which the translator cannot render.

pub mod config;
pub mod core;
pub mod query;
pub mod utils;

pub use crate::core::{DataType, Expression, RewriteError, RewriteResult, Value};
pub use crate::query::rewrite::{
    create_default_rewriter, rewrite_query, ComponentNullCheckRule, ExpressionRewriteRule,
    GuardMatching, QueryRewriter, RewriteStats,
};
