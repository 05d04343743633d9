pub mod handlers;
pub mod header;
pub mod loading;
pub mod notice;
pub mod results;
pub mod theme;
pub mod upload;
pub mod utils;
