//! InMemory Repository 実装

mod classroom;

pub use classroom::InMemoryClassroomRepository;
