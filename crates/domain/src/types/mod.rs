//! Domain types and models
//!
//! All records that live in browser storage keep their original camelCase
//! wire names so stored data written by earlier extension versions parses
//! unchanged.

pub mod aggregate;
pub mod customization;
pub mod iam;
pub mod profile;
pub mod settings;
pub mod user;

pub use aggregate::AggregateData;
pub use customization::{
    AccountCustomization, Customization, Hotkeys, PartialCustomization, ProfileCustomization,
};
pub use iam::IamRole;
pub use profile::{ApplicationKind, ApplicationProfile, ProfileRecord, SearchMetadata};
pub use settings::{ContainerSettings, PartialSettings, Settings, TableSettings};
pub use user::User;
