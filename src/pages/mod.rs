//! Page components for Career Theme Park.

mod career_trail;
mod coming_soon;

pub use career_trail::CareerTrail;
pub use coming_soon::{Certifications, Projects, Skills};
