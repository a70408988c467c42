pub mod facets;
pub mod filter;
pub mod normalize;
pub mod paginate;
pub mod problem;
pub mod sort;

pub use facets::Facets;
pub use filter::{FilterCriterion, FilterState};
pub use paginate::{PageEntry, PageInfo};
pub use problem::{Difficulty, Problem, ProblemId};
pub use sort::{SortDirection, SortKey, SortState};
