mod common;

mod country;
mod routing;
mod service;
mod validation;
