pub mod not_found_controllers;
