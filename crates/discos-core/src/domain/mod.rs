pub mod artist;
pub mod ids;
pub mod record;

pub use artist::{Artist, NewArtist};
pub use ids::{ArtistId, RecordId};
pub use record::{NewRecord, Record};
