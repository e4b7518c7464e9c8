//! Chore scheduling domain models.
//!
//! Provides the data types for representing a chore distribution problem
//! and its solutions. Entities are supplied wholesale and are immutable
//! afterwards; assignments are owned values copied on every mutation.
//!
//! # Domain Mappings
//!
//! | chore-schedule | Household | Office | Volunteer group |
//! |----------------|-----------|--------|-----------------|
//! | Chore | Dishes, trash | On-call shift | Event duty |
//! | User | Roommate | Engineer | Volunteer |
//! | Assignment | Weekly rota | Rotation plan | Duty roster |

mod assignment;
mod chore;
mod index;
mod user;

pub use assignment::{Assignment, NamedSchedule};
pub use chore::{total_instances, Chore};
pub use index::ChoreIndex;
pub use user::User;
