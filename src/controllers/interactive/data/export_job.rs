use std::path::PathBuf;
use std::sync::Arc;

use crate::controllers::interactive::data::frame_data::FrameData;

#[derive(Debug, Clone)]
pub struct ExportJob {
    pub frame: Arc<FrameData>,
    pub path: PathBuf,
}
