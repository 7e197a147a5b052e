pub mod rsvp_repository;
