pub mod analytics;
pub mod filter;
pub mod model;
pub mod store;

pub use filter::{FilterCriteria, Selection};
pub use model::{EdgeData, GraphElement, Position, TopicId};
pub use store::{GraphStore, SelectOption};
