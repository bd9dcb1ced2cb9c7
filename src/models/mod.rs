pub mod census;
pub mod metadata;
pub mod source;
pub mod table;
pub mod township;

pub use census::{
    CensusSection, Communication, HomeOwnership, HouseholdSize, LightSource, Transportation,
};
pub use metadata::{ColumnMetadata, MetadataCatalog};
pub use source::SourceKind;
pub use table::{Cell, TownshipTable};
pub use township::{BaselineRecord, GeoLocation, TownshipRecord};
