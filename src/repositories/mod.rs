pub mod property_repository;
