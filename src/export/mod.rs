pub mod export_service;
pub mod scaffold;

pub use export_service::ExportService;
pub use scaffold::ScaffoldGenerator;
