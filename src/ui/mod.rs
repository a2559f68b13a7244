pub mod blocks;
pub mod context;
pub mod json;
pub mod primitives;
pub mod prompt;
pub mod terminal;
pub mod theme;
pub mod views;
