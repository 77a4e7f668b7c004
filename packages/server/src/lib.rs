//! Kokuban classroom broadcast relay server.
//!
//! A teacher connection fans drawing strokes and board clears out to every
//! student connection; students raise hands and the teacher sees the count.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
