mod import_app;
mod operation;

pub use import_app::ImportApp;
pub use operation::ImportOperation;
