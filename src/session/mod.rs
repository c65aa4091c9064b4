//! Life-counter sessions: snapshot history, commands, table layout.

pub mod history;
pub mod engine;
pub mod table;
pub mod report;

pub use history::History;
pub use engine::LifeSession;
pub use table::{PlayerColor, PlayerTheme, Seating, PALETTE};
pub use report::MatchReporter;
