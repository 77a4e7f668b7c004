//! UseCase: 教室の状態取得

use std::sync::Arc;

use crate::domain::{Classroom, ClassroomRepository};

/// 教室の状態取得のユースケース
pub struct GetClassroomStateUseCase {
    repository: Arc<dyn ClassroomRepository>,
}

impl GetClassroomStateUseCase {
    pub fn new(repository: Arc<dyn ClassroomRepository>) -> Self {
        Self { repository }
    }

    /// 教室のスナップショットを取得
    pub async fn execute(&self) -> Classroom {
        self.repository.get_classroom().await
    }
}
