//! UseCase layer: one use case per classroom event, dispatched by the session coordinator.

mod authenticate;
mod clear_hands;
mod connect_participant;
mod coordinator;
mod disconnect_participant;
mod error;
mod get_classroom_state;
mod raise_hand;
mod relay_board;

pub use authenticate::AuthenticateUseCase;
pub use clear_hands::ClearHandsUseCase;
pub use connect_participant::ConnectParticipantUseCase;
pub use coordinator::SessionCoordinator;
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use error::EventError;
pub use get_classroom_state::GetClassroomStateUseCase;
pub use raise_hand::RaiseHandUseCase;
pub use relay_board::RelayBoardUseCase;
