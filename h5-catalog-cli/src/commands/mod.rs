pub(crate) mod config;
pub(crate) mod games;
pub(crate) mod songs;
