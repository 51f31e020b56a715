pub mod market;
pub mod record;
