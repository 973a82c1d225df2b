pub mod scheduling_repository;
