pub mod avatar;
pub mod element;
pub mod map;
pub mod map_element;
pub mod space;
pub mod space_element;
pub mod user;
