//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。
//! 各ユースケースは「誰に何を送るか」を Outcome として返し、
//! 実際の送信は UI 層（transport）が行います。

pub mod disconnect;
pub mod enter_room;
pub mod relay_message;
pub mod signal_activity;

pub use disconnect::{DisconnectOutcome, DisconnectUseCase};
pub use enter_room::{DepartedRoom, EnterRoomOutcome, EnterRoomUseCase};
pub use relay_message::{RelayMessageUseCase, RelayedMessage};
pub use signal_activity::{ActivitySignal, SignalActivityUseCase};
