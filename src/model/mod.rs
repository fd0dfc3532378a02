pub mod criteria;
pub mod profile;
pub mod record;
