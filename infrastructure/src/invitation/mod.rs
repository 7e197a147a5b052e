pub mod invitation_repository;
