//! Repository 実装
//!
//! - `inmemory`: プロセス内メモリを使った実装（永続化しない）

pub mod inmemory;

pub use inmemory::InMemoryClassroomRepository;
