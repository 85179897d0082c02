pub mod calendar;
pub mod grid;
pub mod mark;
pub mod remind;
pub mod summary;
pub mod sync;
