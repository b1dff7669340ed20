pub mod parse;
pub mod node;
pub mod list;
pub mod error;
pub mod diagnostics;
pub mod wasm;

mod chariter;
mod xmlchar;
mod serialize;

pub use diagnostics::{CollectingSink, DiagnosticSink, TracingSink};
pub use error::{AttributeError, ErrorPos, TreeError, XmlError};
pub use list::{ChildId, ChildList};
pub use node::XmlNode;
pub use parse::{parse, XmlParser};
