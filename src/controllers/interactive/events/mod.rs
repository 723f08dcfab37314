pub mod export_event;
