pub mod dom;
pub mod errors;
pub mod fetcher;
pub mod formatting;
pub mod page;
pub mod renderer;
pub mod shared;
