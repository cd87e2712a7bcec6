use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    mandelbulb_voxels::init_logging();

    let settings = mandelbulb_voxels::RenderArgs::parse().into_settings()?;
    let presenter = mandelbulb_voxels::PpmFilePresenter::new();
    let mut controller = mandelbulb_voxels::CliRenderController::new(presenter, settings);

    controller.generate()?;
    controller.write()?;

    Ok(())
}
