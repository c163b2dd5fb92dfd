//! One repository per table. Each holds a handle to the shared pool, issues
//! a single parameterized statement per call and relies on SQLite's
//! autocommit, so no call spans more than one statement.

pub mod activities;
pub mod emails_to_invite;
pub mod links;
pub mod participants;
pub mod trips;

pub use activities::ActivitiesRepository;
pub use emails_to_invite::EmailsToInviteRepository;
pub use links::LinksRepository;
pub use participants::ParticipantsRepository;
pub use trips::TripsRepository;
