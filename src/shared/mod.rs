pub mod api;
pub mod dates;
pub mod read_outcome;
