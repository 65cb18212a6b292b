pub mod bootcamp;
pub mod catalog;
pub mod page;

pub use bootcamp::{
    Bootcamp, BootcampCandidate, BootcampId, CapacityId, NewBootcamp, TechnologyId,
};
pub use catalog::{Capacity, Identified, Technology};
pub use page::{
    Order, Page, PageRequest, SortBy, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
