//! Digit Map Generation
//!
//! Flattens a dialplan context, and everything it includes, into the digit map
//! grammar used by ATAs, gateways and IP phones to decide when dialing is
//! complete. Entries are joined with `|`; a `,` asks the device for a second
//! dial tone.

pub mod cursor;
pub mod generator;
pub mod stack;
pub mod translate;

pub use cursor::OutputCursor;
pub use generator::MapGenerator;
pub use stack::ActiveStack;
pub use translate::translate;

/// Separator written before every digit map entry
pub const SEPARATOR: char = '|';

/// Second dial tone marker
pub const SECOND_DIAL_TONE: char = ',';

/// Default include depth bound
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Grandstream devices accept digit maps of at most 2048 bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 2048;
