pub mod activity;
pub mod email_invite;
pub mod link;
pub mod participant;
pub mod trip;
