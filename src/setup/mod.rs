pub mod db_setup;
pub mod fixtures;
