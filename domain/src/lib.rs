pub mod invitation;
pub mod ports;
pub mod rsvp;
