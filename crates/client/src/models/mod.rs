//! Request and response models for the two platform APIs.

mod alias;
mod data_view;
mod report;
mod saved_objects;
mod security;
mod space;

pub use alias::{AddAlias, AliasAction, AliasActions};
pub use data_view::{
    CreateDataViewRequest, DataViewListResponse, DataViewSpec, DataViewSummary, EVENT_TIME_FIELD,
};
pub use report::{OpReport, OpStatus};
pub use saved_objects::{
    ExportObject, ExportRequest, ImportResponse, ImportedObject, Reference, SavedObject,
    SavedObjectUpdate,
};
pub use security::{
    ApplicationPrivilege, DASHBOARD_READ_PRIVILEGE, INDEX_PRIVILEGES, IndexPrivilege,
    KIBANA_APPLICATION, RoleSpec,
};
pub use space::{DISABLED_FEATURES, Feature, Space};
