pub mod requests;
pub mod responses;
pub mod rows;
pub mod translation;

pub use requests::*;
pub use responses::*;
pub use rows::*;
