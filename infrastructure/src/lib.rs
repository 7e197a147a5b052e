pub mod database;
pub mod invitation;
pub mod random;
pub mod rsvp;
