pub mod post_controllers;
pub mod post_dtos;
pub mod post_repositories;
