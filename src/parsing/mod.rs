//! HTML and free-text parsers for the upstream laundry pages.
//!
//! - `parse_locations`: campus listing page -> sorted rooms
//! - `parse_room`: room page -> washers and dryers
//! - `classify_status`: status phrase (+ progress width) -> `Status`
//! - `parse_availability`: `"(3 W / 5 D)"` -> `(3, 5)`
//!
//! Nothing here touches the network; the fetch layer hands over raw HTML.

mod availability;
mod locations;
mod machines;
mod selectors;
mod status;

pub use availability::parse_availability;
pub use locations::{clean_location_name, parse_locations};
pub use machines::{ROWS_PER_MACHINE, parse_machine_rows, parse_room};
pub use status::{PROGRESS_BAR_MAX_WIDTH, classify_status};
