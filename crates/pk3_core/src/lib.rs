pub mod boxes;
pub mod creature;
pub mod data;
pub mod error;
pub mod gender;
pub mod language;
pub mod layout;
pub mod reader;
pub mod save;
pub mod stats;
pub mod text;

pub use boxes::{BoxExtractor, PcBox};
pub use creature::{CreatureRecord, Encryption, RecordLayout};
pub use data::{DataTables, GameData};
pub use error::{CodecError, CodecErrorCode};
pub use save::SaveContainer;
