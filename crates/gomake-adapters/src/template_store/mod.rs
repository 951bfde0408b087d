//! Template Store adapters.

mod tera_store;

pub use tera_store::{TEMPLATE_SUFFIX, TEMPLATES_DIR_ENV, TeraTemplateStore};
