pub mod json_file_repository;
