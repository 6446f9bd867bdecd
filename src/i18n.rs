pub(crate) mod localizer;
pub(crate) mod table;
