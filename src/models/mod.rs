pub mod form;
pub mod record;
pub mod status;
