pub mod error;
pub mod event;

pub use event::Event;
pub use event::EventData;
