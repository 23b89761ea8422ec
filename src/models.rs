mod category;
mod location;
mod project;

pub use self::{category::Category, location::Location, project::Project};
