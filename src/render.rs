pub(crate) mod html;
pub(crate) mod page;
pub(crate) mod sections;
pub(crate) mod video;
