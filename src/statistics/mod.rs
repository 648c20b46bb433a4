//! Numerical building blocks for replication analysis.
//!
//! This module provides the special functions the classifier relies on:
//! - Lanczos log-gamma
//! - Regularized incomplete beta via Lentz's continued fraction
//! - Exact two-tailed t-distribution p-values
//! - Fisher z-transformation confidence intervals

mod beta;
mod fisher;
mod gamma;
mod t_dist;

pub use beta::regularized_incomplete_beta;
pub use fisher::{fisher_ci, fisher_ci_with_z, fisher_z, inverse_fisher_z};
pub use gamma::ln_gamma;
pub use t_dist::{p_value_from_r, p_value_from_t};
