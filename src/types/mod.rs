//! Strong types shared across the valuation pipeline

pub mod tokens;
