mod choice;
mod controller;
mod error;
mod stdio;

pub use choice::Choice;
pub use controller::{Console, State, EXIT_MESSAGE, INVALID_CHOICE, MENU};
pub use error::{ChoiceError, ConsoleError};
pub use stdio::{Attached, Detached};
