use mandelbrot_explorer::{PixelsPresenter, RunGuiCommand};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = mandelbrot_explorer::parse_args(&args)?;

    RunGuiCommand::<PixelsPresenter>::new(config).execute()
}
