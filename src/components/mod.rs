//! UI Components
//!
//! Screens and reusable Leptos components.

mod breed_card;
mod breed_filter;
mod dog_details;
mod home_screen;
mod nav_bar;
mod pagination_bar;

pub use breed_card::BreedCard;
pub use breed_filter::BreedFilter;
pub use dog_details::DogDetails;
pub use home_screen::HomeScreen;
pub use nav_bar::NavBar;
pub use pagination_bar::PaginationBar;
