//! UseCase 層
//!
//! セッションの開始時と終了時に Registry と永続化層をつなぐレイヤー。
//! UI 層から呼び出され、Domain 層の RoomRepository trait を操作します。

pub mod error;
pub mod persist_registry;
pub mod restore_registry;

pub use error::PersistError;
pub use persist_registry::PersistRegistryUseCase;
pub use restore_registry::{RestoreRegistryUseCase, Restored};
