pub(crate) mod assets;
pub(crate) mod index;
pub(crate) mod model;
pub(crate) mod path;
pub(crate) mod sanitize;
