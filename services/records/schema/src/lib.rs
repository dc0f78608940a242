//! sea-orm entities for the records service.

pub mod documents;
