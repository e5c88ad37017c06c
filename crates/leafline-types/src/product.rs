//! Product search result types.
//!
//! The product-search collaborator is external; this is the shape of the
//! results it returns, passed through without interpretation.

use serde::{Deserialize, Serialize};

/// One hit from the external product-search collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductHit {
    pub name: String,
    /// Display price as the collaborator formats it (e.g. "$4.99").
    pub price: String,
    pub description: String,
}
