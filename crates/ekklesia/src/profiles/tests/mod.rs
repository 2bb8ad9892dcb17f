mod common;
mod completion;
mod service;
