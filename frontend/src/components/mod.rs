pub mod before_after;

pub use before_after::BeforeAfterReveal;
