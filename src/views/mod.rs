pub mod ask;
pub mod history;
pub mod layout;
pub mod quiz;
pub mod solver;

// Re-export the page shell from layout
pub use layout::page;
