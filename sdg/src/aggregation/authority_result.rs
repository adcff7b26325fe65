use crate::model::{Category, ResultRow};
use indexmap::IndexMap;

/// all result rows of one local authority, grouped by category in output
/// order
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorityResult {
    pub local_authority: String,
    pub n_stops: usize,
    pub n_output_areas: usize,
    pub n_served_output_areas: usize,
    pub blocks: IndexMap<Category, Vec<ResultRow>>,
}

impl AuthorityResult {
    pub fn block(&self, category: Category) -> Option<&[ResultRow]> {
        self.blocks.get(&category).map(Vec::as_slice)
    }

    /// the single row of the Total block
    pub fn total(&self) -> Option<&ResultRow> {
        self.block(Category::Total).and_then(|rows| rows.first())
    }
}
