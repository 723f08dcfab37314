pub mod export_job;
pub mod frame_data;
