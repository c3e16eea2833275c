//! UseCase: 起動時の Registry 復元処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RestoreRegistryUseCase::execute() メソッド
//! - 永続化データからの Registry 構築と、読み込み失敗時の縮退動作
//!
//! ### なぜこのテストが必要か
//! - 壊れたファイルがあってもプログラムは停止せず、空の状態で起動する必要がある
//! - 警告は UI 層に渡され、利用者に表示される
//!
//! ### どのような状況を想定しているか
//! - 正常系：保存済みの Room を読み込む
//! - エッジケース：保存データなし
//! - 異常系：読み込み失敗（空の Registry と警告）

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{RepositoryError, RoomRegistry, RoomRepository};

/// Result of restoring the registry at startup
#[derive(Debug)]
pub struct Restored {
    /// Registry to run the session with; empty when loading failed
    pub registry: RoomRegistry,
    /// Why the persisted state was discarded, if it was
    pub warning: Option<RepositoryError>,
}

/// 起動時に Registry を復元するユースケース
pub struct RestoreRegistryUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl RestoreRegistryUseCase {
    /// 新しい RestoreRegistryUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Registry の復元を実行
    ///
    /// Never fails: a load error degrades to an empty registry and is
    /// reported through `Restored::warning`.
    pub fn execute(&self) -> Restored {
        match self.repository.load() {
            Ok(rooms) => {
                let registry = RoomRegistry::hydrate(rooms);
                info!(rooms = registry.len(), "registry restored");
                Restored {
                    registry,
                    warning: None,
                }
            }
            Err(e) => {
                warn!(error = %e, "could not load persisted rooms, starting empty");
                Restored {
                    registry: RoomRegistry::new(),
                    warning: Some(e),
                }
            }
        }
    }
}
