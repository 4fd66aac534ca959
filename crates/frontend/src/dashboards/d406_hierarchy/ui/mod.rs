mod page;

pub use page::{HierarchyLevel, HierarchyPage};
