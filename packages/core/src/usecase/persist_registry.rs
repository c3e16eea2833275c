//! UseCase: 終了時の Registry 保存処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PersistRegistryUseCase::execute() メソッド
//! - 全ての Room が登録順に Repository へ渡されること
//!
//! ### どのような状況を想定しているか
//! - 正常系：全件保存
//! - 異常系：書き込み失敗（エラーを返し、パニックしない）

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{RoomRegistry, RoomRepository};

use super::error::PersistError;

/// 終了時に Registry を保存するユースケース
pub struct PersistRegistryUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl PersistRegistryUseCase {
    /// 新しい PersistRegistryUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Registry の保存を実行
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - 保存した Room の件数
    /// * `Err(PersistError)` - 保存失敗
    pub fn execute(&self, registry: &RoomRegistry) -> Result<usize, PersistError> {
        let rooms = registry.rooms();
        match self.repository.save(rooms) {
            Ok(()) => {
                info!(rooms = rooms.len(), "registry persisted");
                Ok(rooms.len())
            }
            Err(source) => {
                warn!(error = %source, "could not persist registry");
                Err(PersistError::SaveFailed {
                    rooms: rooms.len(),
                    source,
                })
            }
        }
    }
}
