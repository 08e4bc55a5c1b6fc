pub mod cors;
pub mod db;
