//! Sample rulesets.

pub mod rotisserie;
