//! UI Components for Career Theme Park.

mod career_map;
mod nav_bar;
mod search_bar;
mod trail_card;
mod trail_list;

pub use career_map::CareerMap;
pub use nav_bar::{NavBar, NavLocation};
pub use search_bar::SearchBar;
pub use trail_card::TrailCard;
pub use trail_list::TrailList;
