pub mod invitation;
pub mod rsvp;
