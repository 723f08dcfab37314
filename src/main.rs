use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = mandelbrot_explorer::parse_args(&args)?;

    log::info!(
        "Rendering {}x{} frame after {} command(s)",
        config.width,
        config.height,
        config.commands.len()
    );

    let file_presenter = mandelbrot_explorer::file_presenter_for_path(&config.output_path);
    let controller = mandelbrot_explorer::CliRenderController::new(&config, file_presenter)?;
    let path = controller.run()?;

    println!("Saved to {}", path.display());

    Ok(())
}
