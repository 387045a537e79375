//! Readline-style cursor motions and kills over an abstract editor host.
//!
//! `dispatch` resolves a target with the boundary engine from `core-text`,
//! then asks the host to move the cursor or to delete the covered span.
//! Hosts implement `EditorHost`; `BufferHost` and `CommandLineHost` cover a
//! multi-line buffer and a single-line prompt over `core_state::EditorState`.

pub mod command;
pub mod dispatcher;
pub mod host;

pub use command::{ReadlineCommand, UnknownCommand};
pub use dispatcher::{DispatchResult, dispatch, resolve_target};
pub use host::{BufferHost, CommandLineHost, EditorHost, LinePosition};
