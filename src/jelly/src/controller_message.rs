use protocol::user_event::UserEvent;

pub enum ControllerMessage {
	TogglePause,
	FrameForward,
	User(UserEvent),
}
