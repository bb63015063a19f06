//! 查询处理模块
//!
//! 在表达式树交给 ORM 翻译器之前对其做重写

pub mod rewrite;
