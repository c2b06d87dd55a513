pub mod table_controller;
