pub mod citation;
pub mod error;
pub mod markup;
pub mod session;
pub mod turn;

pub use citation::{aggregate, AggregatedCitation};
pub use error::{CoreError, Result};
pub use markup::block::{parse_blocks, ContentBlock};
pub use markup::inline::{parse_inline, InlineSpan};
pub use markup::line::{classify, LineKind};
pub use session::{SessionId, SessionStore};
pub use turn::{Citation, Role, Turn, TurnId};
